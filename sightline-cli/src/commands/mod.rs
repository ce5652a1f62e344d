//! CLI command implementations.

pub mod bearing;
pub mod fetch;
