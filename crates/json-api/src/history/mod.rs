//! Search history endpoints.

pub(crate) mod index;
