//! Service configuration
//!
//! Everything arrives through environment variables with working defaults,
//! so a bare `todo-api` binds to localhost and talks to a local MongoDB.

use std::env;

/// Default bind address
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
const DEFAULT_PORT: u16 = 3000;

/// Default store connection string, naming the database on its path
const DEFAULT_STORE_URI: &str = "mongodb://localhost:27017/todo-tdd";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (`TODO_API_HOST`)
    pub host: String,
    /// Bind port (`TODO_API_PORT`)
    pub port: u16,
    /// Store connection string (`MONGODB_URI`)
    pub store_uri: String,
}

impl Config {
    /// Read configuration from the environment
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let host = env::var("TODO_API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("TODO_API_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let store_uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_STORE_URI.to_string());
        Self {
            host,
            port,
            store_uri,
        }
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
