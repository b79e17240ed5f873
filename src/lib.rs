//! jpregion-rs: facade over `jpregion-core` used by the demos.

pub use jpregion_core::*;
