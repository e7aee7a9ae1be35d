//! Cross-origin request handling.

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::header::HeaderValue,
};
use tracing::warn;

use crate::config::cors::CorsConfig;

/// Build the CORS handler for the configured origins.
///
/// A wildcard origin allows any caller without credentials; otherwise only
/// the listed origins are echoed back.
pub(crate) fn handler(config: &CorsConfig) -> CorsHandler {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin.trim())
                .map_err(|source| warn!(origin, "ignoring invalid CORS origin: {source}"))
                .ok()
        }))
    };

    Cors::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler()
}
