// src/calculator/registry.rs
// Immutable operator tables, built once at startup

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use super::operations::{advanced, basic, scientific, BinaryFn, UnaryFn};

/// A registered binary operator.
#[derive(Clone, Copy)]
pub struct BinaryOperator {
    pub symbol: &'static str,
    pub description: &'static str,
    pub apply: BinaryFn,
}

/// A registered unary operator.
#[derive(Clone, Copy)]
pub struct UnaryOperator {
    pub symbol: &'static str,
    pub description: &'static str,
    pub apply: UnaryFn,
}

/// Symbol → operation tables. Populated by [`build_registry`] during startup
/// and read-only afterwards; the binary and unary namespaces are kept disjoint.
#[derive(Default)]
pub struct OperatorRegistry {
    binary: HashMap<&'static str, BinaryOperator>,
    unary: HashMap<&'static str, UnaryOperator>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binary operator. Last writer for a symbol wins; a duplicate
    /// registration is a configuration error and is logged.
    pub fn register_binary(&mut self, symbol: &'static str, description: &'static str, apply: BinaryFn) {
        let op = BinaryOperator { symbol, description, apply };
        if self.binary.insert(symbol, op).is_some() {
            warn!("binary operator '{}' registered twice; keeping the last registration", symbol);
        }
    }

    /// Register a unary operator. Last writer for a symbol wins.
    pub fn register_unary(&mut self, symbol: &'static str, description: &'static str, apply: UnaryFn) {
        let op = UnaryOperator { symbol, description, apply };
        if self.unary.insert(symbol, op).is_some() {
            warn!("unary operator '{}' registered twice; keeping the last registration", symbol);
        }
    }

    pub fn binary(&self, symbol: &str) -> Option<&BinaryOperator> {
        self.binary.get(symbol)
    }

    pub fn unary(&self, symbol: &str) -> Option<&UnaryOperator> {
        self.unary.get(symbol)
    }

    pub fn is_binary(&self, symbol: &str) -> bool {
        self.binary.contains_key(symbol)
    }

    pub fn is_unary(&self, symbol: &str) -> bool {
        self.unary.contains_key(symbol)
    }

    /// All registered symbols, binary then unary. Order within each table is
    /// unspecified.
    pub fn symbols(&self) -> Vec<&'static str> {
        self.binary
            .keys()
            .chain(self.unary.keys())
            .copied()
            .collect()
    }

    pub fn binary_operators(&self) -> impl Iterator<Item = &BinaryOperator> {
        self.binary.values()
    }

    pub fn unary_operators(&self) -> impl Iterator<Item = &UnaryOperator> {
        self.unary.values()
    }
}

/// Build the full operator set. Explicit and ordered: registration happens
/// here and nowhere else.
pub fn build_registry() -> OperatorRegistry {
    let mut registry = OperatorRegistry::new();

    // Basic arithmetic
    registry.register_binary("+", "Addition", basic::add);
    registry.register_binary("-", "Subtraction", basic::subtract);
    registry.register_binary("*", "Multiplication", basic::multiply);
    registry.register_binary("/", "Division", basic::divide);

    // Advanced
    registry.register_binary("^", "Power", advanced::power);
    registry.register_binary("%", "Modulo", advanced::modulo);
    registry.register_unary("sqrt", "Square root", advanced::sqrt);

    // Scientific (trig in degrees)
    registry.register_unary("sin", "Sine (degrees)", scientific::sin);
    registry.register_unary("cos", "Cosine (degrees)", scientific::cos);
    registry.register_unary("tan", "Tangent (degrees)", scientific::tan);
    registry.register_unary("asin", "Arcsine (degrees)", scientific::asin);
    registry.register_unary("acos", "Arccosine (degrees)", scientific::acos);
    registry.register_unary("atan", "Arctangent (degrees)", scientific::atan);
    registry.register_unary("log", "Base-10 logarithm", scientific::log10);
    registry.register_unary("ln", "Natural logarithm", scientific::ln);
    registry.register_unary("exp", "Exponential (e^x)", scientific::exp);
    registry.register_unary("fact", "Factorial", scientific::factorial);
    registry.register_unary("inv", "Reciprocal (1/x)", scientific::reciprocal);
    registry.register_unary("sqr", "Square", scientific::square);
    registry.register_unary("cbrt", "Cube root", scientific::cbrt);
    registry.register_unary("abs", "Absolute value", scientific::absolute);
    registry.register_unary("neg", "Negation", scientific::negate);

    registry
}

/// Process-wide operator registry.
pub static REGISTRY: Lazy<OperatorRegistry> = Lazy::new(build_registry);
