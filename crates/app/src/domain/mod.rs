//! Price Finder Domain Concerns

pub mod history;
pub mod platforms;
pub mod products;
pub mod search;
pub mod stats;
