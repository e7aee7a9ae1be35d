//! API Status Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "Smart Price Finder API";

/// API status response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Service name
    pub message: String,

    /// Service status
    pub status: String,
}

/// API status handler
///
/// Liveness check, touches no dependencies.
#[endpoint(tags("health"), summary = "API status")]
pub(crate) async fn handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: SERVICE_NAME.to_string(),
        status: "active".to_string(),
    })
}
