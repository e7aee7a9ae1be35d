//! Catalog search endpoints.

pub(crate) mod models;
pub(crate) mod search;
pub(crate) mod stats;
