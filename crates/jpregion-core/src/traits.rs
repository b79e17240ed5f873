// crates/jpregion-core/src/traits.rs
use crate::error::Result;
use crate::model::{DefinitionSet, Region};
use crate::scope::Scope;
use indexmap::IndexMap;

/// Storage backend for region definitions.
///
/// This abstraction allows the crate to swap where definitions come from
/// (files on disk, an embedded snapshot, an in-memory fixture) without
/// changing the lookup logic in
/// [`RegionRepository`](crate::repository::RegionRepository).
///
/// Implementors report failures as errors; caching and the "no data means
/// empty" policy live in [`DefinitionStore`](crate::store::DefinitionStore).
/// Implementors must be `Send + Sync` so a repository can be shared across
/// threads.
pub trait DefinitionSource: Send + Sync {
    /// Reads the definition set for `scope`.
    ///
    /// Called at most once per scope per store while it succeeds.
    fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet>;
}

impl<S: DefinitionSource + ?Sized> DefinitionSource for Box<S> {
    fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet> {
        (**self).read_definitions(scope)
    }
}

impl<S: DefinitionSource + ?Sized> DefinitionSource for std::sync::Arc<S> {
    fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet> {
        (**self).read_definitions(scope)
    }
}

/// Read operations over regions.
///
/// Absence of data is never an error: malformed ids, unknown ids and
/// unreadable resources all come back as `None` or an empty map.
pub trait RegionLookup {
    /// Returns the region with the given composite id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jpregion_core::{RegionLookup, RegionRepository};
    ///
    /// let repo = RegionRepository::new();
    ///
    /// if let Some(tokyo) = repo.get("JP-13", Some("en")) {
    ///     println!("{} ({})", tokyo.name(), tokyo.code());
    /// }
    /// assert!(repo.get("JP", None).is_none());
    /// ```
    fn get(&self, id: &str, locale: Option<&str>) -> Option<Region>;

    /// Returns every region in the scope, keyed by id, in resource order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jpregion_core::{RegionLookup, RegionRepository};
    ///
    /// let repo = RegionRepository::new();
    ///
    /// for (id, region) in repo.get_all("JP", None, Some("en")).iter().take(5) {
    ///     println!("- {id}: {}", region.name());
    /// }
    /// ```
    fn get_all(
        &self,
        country_code: &str,
        parent_id: Option<&str>,
        locale: Option<&str>,
    ) -> IndexMap<String, Region>;

    /// Returns only the display names of the scope's regions, keyed by id.
    fn get_list(
        &self,
        country_code: &str,
        parent_id: Option<&str>,
        locale: Option<&str>,
    ) -> IndexMap<String, String>;
}
