//! Products

pub mod generator;
pub mod records;

pub use generator::{generate, generate_for};
