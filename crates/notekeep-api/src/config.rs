//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgres://localhost/notekeep` |
//! | `DATABASE_MAX_CONNECTIONS` | 10 |
//! | `DATABASE_CONNECT_TIMEOUT_SECS` | 30 |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | 5000 |
//! | `DEBUG` | off |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000` |

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use notekeep_db::pool::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};
use notekeep_db::PoolConfig;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/notekeep";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub pool: PoolConfig,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Raw comma-separated whitelist; see [`ServerConfig::cors_origins`].
    pub allowed_origins: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let connect_timeout_secs = lookup("DATABASE_CONNECT_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            pool: PoolConfig::new()
                .max_connections(max_connections)
                .connect_timeout(Duration::from_secs(connect_timeout_secs)),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            debug: lookup("DEBUG").is_some_and(|v| parse_flag(&v)),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        }
    }

    /// Filter directives used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "notekeep_api=debug,notekeep_db=debug,tower_http=debug"
        } else {
            "notekeep_api=info,notekeep_db=info,tower_http=info"
        }
    }

    /// Parsed CORS whitelist. Call after logging is up so skipped entries are reported.
    pub fn cors_origins(&self) -> Vec<HeaderValue> {
        parse_allowed_origins(&self.allowed_origins)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// `1`, `true`, `yes`, and `on` (any case) switch a flag on.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Parse a comma-separated origin whitelist. Invalid entries are skipped.
pub fn parse_allowed_origins(origins: &str) -> Vec<HeaderValue> {
    if origins.trim().is_empty() {
        return vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)];
    }

    origins
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}
