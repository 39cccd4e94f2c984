// src/lib.rs

pub mod api;
pub mod calculator;
pub mod cli;
pub mod config;
