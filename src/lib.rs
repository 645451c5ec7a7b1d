//! Umbrella crate for the nsalias workspace integration tests
pub use nsalias_core::*;
