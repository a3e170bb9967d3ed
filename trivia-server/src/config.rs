//! Server configuration
//!
//! Built once at process start by the binary (flags, environment, `.env`)
//! and passed by value into [`crate::run_server`]. Nothing here is global.

use std::net::SocketAddr;

use url::Url;

/// Default bind address (matches the reference frontend's proxy target)
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

const REDACTED: &str = "***";

/// Default maximum connections for the pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("database url cannot be empty")]
    MissingDatabaseUrl,

    #[error("max connections must be at least 1")]
    NoConnections,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Pool size
    pub max_connections: u32,
}

impl ServerConfig {
    /// Config with default bind address and pool size.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Check the values before anything connects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ConfigError::NoConnections);
        }
        Ok(())
    }

    /// Database URL with any password replaced, safe for logs.
    ///
    /// Masks the userinfo password and a `password` query parameter.
    /// An unparseable URL is hidden entirely.
    pub fn redacted_database_url(&self) -> String {
        let Ok(mut url) = Url::parse(&self.database_url) else {
            return REDACTED.to_owned();
        };

        if url.password().is_some() {
            // Fails only for URLs without a host, which carry no userinfo
            url.set_password(Some(REDACTED)).ok();
        }

        if url.query_pairs().any(|(key, _)| key == "password") {
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(key, value)| {
                    let value = if key == "password" { REDACTED.into() } else { value };
                    (key.into_owned(), value.into_owned())
                })
                .collect();
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        url.into()
    }
}
