//! Price Statistics

pub mod records;
pub mod reducer;

pub use records::{PlatformStats, PriceStats};
pub use reducer::aggregate;
