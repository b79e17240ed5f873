// crates/jpregion-core/src/repository.rs
use crate::loader::JsonFileSource;
use crate::model::{DefinitionSet, Region};
use crate::scope::Scope;
use crate::store::DefinitionStore;
use crate::traits::{DefinitionSource, RegionLookup};
use crate::translate::translate_definition;
use indexmap::IndexMap;
use std::path::PathBuf;
use tracing::debug;

#[cfg(feature = "bundled")]
use crate::loader::BundledSource;

/// Region lookups over a cached [`DefinitionSource`].
///
/// The definitions of each scope are read on first use and kept for the
/// lifetime of the repository.
pub struct RegionRepository<S = JsonFileSource> {
    store: DefinitionStore<S>,
}

impl RegionRepository<JsonFileSource> {
    /// Repository over the data directory shipped with this crate.
    pub fn new() -> Self {
        Self::with_source(JsonFileSource::default())
    }

    /// Repository over `<dir>/<scope>.json` files.
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_source(JsonFileSource::new(dir))
    }
}

impl Default for RegionRepository<JsonFileSource> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "bundled")]
impl RegionRepository<BundledSource> {
    /// Repository over the embedded prefecture snapshot; touches no files.
    pub fn bundled() -> Self {
        Self::with_source(BundledSource)
    }
}

impl<S: DefinitionSource> RegionRepository<S> {
    pub fn with_source(source: S) -> Self {
        Self::from_store(DefinitionStore::new(source))
    }

    pub fn from_store(store: DefinitionStore<S>) -> Self {
        RegionRepository { store }
    }

    pub fn store(&self) -> &DefinitionStore<S> {
        &self.store
    }
}

impl<S: DefinitionSource> RegionLookup for RegionRepository<S> {
    fn get(&self, id: &str, locale: Option<&str>) -> Option<Region> {
        let Some(scope) = Scope::from_region_id(id) else {
            debug!(id, "invalid region id");
            return None;
        };
        let definitions = self.store.load_scope(&scope);
        region_from_definitions(id, &definitions, locale)
    }

    fn get_all(
        &self,
        country_code: &str,
        parent_id: Option<&str>,
        locale: Option<&str>,
    ) -> IndexMap<String, Region> {
        let definitions = self.store.load_definitions(Some(country_code), parent_id);
        definitions
            .regions
            .keys()
            .filter_map(|id| {
                region_from_definitions(id, &definitions, locale).map(|r| (id.clone(), r))
            })
            .collect()
    }

    fn get_list(
        &self,
        country_code: &str,
        parent_id: Option<&str>,
        locale: Option<&str>,
    ) -> IndexMap<String, String> {
        let definitions = self.store.load_definitions(Some(country_code), parent_id);
        definitions
            .regions
            .iter()
            .map(|(id, def)| (id.clone(), translate_definition(def, locale).name.to_owned()))
            .collect()
    }
}

/// Builds the [`Region`] for `id` from `definitions`, or `None` if the set
/// has no such id.
pub fn region_from_definitions(
    id: &str,
    definitions: &DefinitionSet,
    locale: Option<&str>,
) -> Option<Region> {
    let definition = definitions.get(id)?;
    let translated = translate_definition(definition, locale);

    Some(Region::new(
        id,
        definitions.country_code.as_str(),
        definitions.scope().parent_id,
        translated.code,
        translated.name,
        definitions.locale.as_str(),
    ))
}
