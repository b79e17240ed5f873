// crates/jpregion-core/src/lib.rs

//! # jpregion-core
//!
//! Read-only lookup of Japanese administrative regions (prefectures and
//! below) from a static dataset, with optional localized names.
//!
//! ```no_run
//! use jpregion_core::prelude::*;
//!
//! let repo = RegionRepository::new();
//! let tokyo = repo.get("JP-13", Some("en")).unwrap();
//! assert_eq!(tokyo.name(), "Tokyo");
//! ```

pub mod error;
pub mod loader; // Definition sources (files, embedded, in-memory)
pub mod model;
pub mod prelude;
pub mod repository;
pub mod scope;
pub mod store;
pub mod traits;
pub mod translate;

// Re-exports
pub use crate::error::{RegionError, Result};
#[cfg(feature = "bundled")]
pub use crate::loader::BundledSource;
pub use crate::loader::{JsonFileSource, StaticSource};
pub use crate::model::{DefinitionSet, RawRegionDefinition, Region, Translation};
pub use crate::repository::RegionRepository;
pub use crate::scope::Scope;
pub use crate::store::DefinitionStore;
// Export the Lookup Traits (Crucial for users!)
pub use crate::traits::{DefinitionSource, RegionLookup};
