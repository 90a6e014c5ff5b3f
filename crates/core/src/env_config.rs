//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{
    PG_ACQUIRE_TIMEOUT_ENV, PG_MAX_CONNECTIONS_ENV, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently.
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Connection pool sizing resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl PoolSettings {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_connections: env_parse_with_default(
                PG_MAX_CONNECTIONS_ENV,
                PG_POOL_MAX_CONNECTIONS,
            )
            .max(1),
            acquire_timeout_secs: env_parse_with_default(
                PG_ACQUIRE_TIMEOUT_ENV,
                PG_POOL_ACQUIRE_TIMEOUT_SECS,
            ),
        }
    }
}
