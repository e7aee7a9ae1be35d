//! Search
//!
//! Fans a query out to every marketplace profile, scores the generated
//! listings against the query and keeps the most relevant ones.

pub mod catalog;
pub mod query;
pub mod ranking;
pub mod service;
pub mod similarity;

pub use catalog::Catalog;
pub use query::{SearchQuery, SearchQueryError};
pub use service::*;
