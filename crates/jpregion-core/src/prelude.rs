//! jpregion prelude: bring common types and traits into scope for demos.

pub use crate::error::{RegionError, Result};
#[cfg(feature = "bundled")]
pub use crate::loader::BundledSource;
pub use crate::loader::{default_data_dir, JsonFileSource, StaticSource};
pub use crate::model::{DefinitionSet, RawRegionDefinition, Region, Translation};
pub use crate::repository::RegionRepository;
pub use crate::scope::Scope;
pub use crate::store::DefinitionStore;
pub use crate::traits::{DefinitionSource, RegionLookup};
pub use crate::translate::translate_definition;
