//! Runtime configuration read from the environment.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::domain::watering_schedule::{DEFAULT_LOOKAHEAD_DAYS, MAX_LOOKAHEAD_DAYS};

pub const DATABASE_URL_VAR: &str = "PLANTS_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "PLANTS_BIND_ADDR";
pub const ALLOWED_ORIGIN_VAR: &str = "PLANTS_ALLOWED_ORIGIN";
pub const LOOKAHEAD_DAYS_VAR: &str = "PLANTS_LOOKAHEAD_DAYS";

// The database URL for the production database
const DEFAULT_DATABASE_URL: &str = "sqlite:plants.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
    #[error("{var} is not a valid origin header value: {value}")]
    InvalidOrigin { var: &'static str, value: String },
    #[error("{var} must be a whole number of days between 1 and 3650, got {value}")]
    InvalidLookahead { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub allowed_origin: HeaderValue,
    pub lookahead_days: u32,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Load configuration from an explicit variable map, falling back to defaults
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str, default: &str| -> String {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database_url = lookup(DATABASE_URL_VAR, DEFAULT_DATABASE_URL);

        let bind_value = lookup(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
            })?;

        let origin_value = lookup(ALLOWED_ORIGIN_VAR, DEFAULT_ALLOWED_ORIGIN);
        let allowed_origin = origin_value
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidOrigin {
                var: ALLOWED_ORIGIN_VAR,
                value: origin_value.clone(),
            })?;

        let lookahead_value = lookup(LOOKAHEAD_DAYS_VAR, &DEFAULT_LOOKAHEAD_DAYS.to_string());
        let lookahead_days = match lookahead_value.parse::<u32>() {
            Ok(days) if (1..=MAX_LOOKAHEAD_DAYS).contains(&days) => days,
            _ => {
                return Err(ConfigError::InvalidLookahead {
                    var: LOOKAHEAD_DAYS_VAR,
                    value: lookahead_value,
                })
            }
        };

        Ok(Self {
            database_url,
            bind_addr,
            allowed_origin,
            lookahead_days,
        })
    }
}
