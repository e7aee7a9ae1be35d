//! Server configuration module

use clap::Parser;

use crate::config::{
    cors::CorsConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, RequestLoggingConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Price Finder JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "pricefinder-json", about = "Smart Price Finder API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging settings.
    #[command(flatten)]
    pub requests: RequestLoggingConfig,

    /// Search history database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Cross-origin request settings.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
