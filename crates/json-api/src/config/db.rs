//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Database name, overriding the one in the connection string
    #[arg(long, env = "DB_NAME")]
    pub database_name: Option<String>,
}
