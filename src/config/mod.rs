// src/config/mod.rs
// Server configuration loaded from .env / environment variables

use std::str::FromStr;

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct CalcConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── CORS Settings
    pub cors_origin: String,

    // ── Logging Configuration
    pub debug_logging: bool,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Tolerate trailing comments and whitespace in .env values
            let clean_val = val.split('#').next().unwrap_or("").trim();
            clean_val.parse::<T>().unwrap_or(default)
        }
        Err(_) => default,
    }
}

impl CalcConfig {
    pub fn from_env() -> Self {
        // Missing .env is fine; environment variables and defaults cover it.
        dotenvy::dotenv().ok();

        Self {
            host: env_var_or("CALC_HOST", "127.0.0.1".to_string()),
            port: env_var_or("CALC_PORT", 8000),
            cors_origin: env_var_or("CALC_CORS_ORIGIN", "*".to_string()),
            debug_logging: env_var_or("CALC_DEBUG_LOGGING", false),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub static CONFIG: Lazy<CalcConfig> = Lazy::new(CalcConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        let config = CalcConfig::from_env();
        assert!(!config.host.is_empty());
        assert!(config.port > 0);
    }

    #[test]
    fn test_bind_address_joins_host_and_port() {
        let config = CalcConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            cors_origin: "*".to_string(),
            debug_logging: false,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
