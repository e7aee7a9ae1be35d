//! CORS Config

use clap::Args;

/// Origin value that allows every origin.
pub const ANY_ORIGIN: &str = "*";

/// Cross-origin request settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Allowed origins, comma separated (`*` allows any origin)
    #[arg(
        long = "cors-origins",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = ANY_ORIGIN
    )]
    pub origins: Vec<String>,
}

impl CorsConfig {
    /// Whether any origin may call the API.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|origin| origin.trim() == ANY_ORIGIN)
    }
}
