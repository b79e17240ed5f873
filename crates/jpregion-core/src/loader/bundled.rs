// crates/jpregion-core/src/loader/bundled.rs
#![cfg(feature = "bundled")]

use crate::error::{RegionError, Result};
use crate::model::DefinitionSet;
use crate::scope::Scope;
use crate::traits::DefinitionSource;
use once_cell::sync::OnceCell;

static JP_DEFINITIONS: &str = include_str!("../../data/JP.json");

// Parsed once per process, shared by every `BundledSource`.
static JP_CACHE: OnceCell<DefinitionSet> = OnceCell::new();

/// The Japanese prefecture snapshot compiled into the library.
///
/// Serves the `JP` root scope only; needs no filesystem access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    pub fn definitions() -> Result<&'static DefinitionSet> {
        JP_CACHE.get_or_try_init(|| DefinitionSet::from_json_str(JP_DEFINITIONS))
    }
}

impl DefinitionSource for BundledSource {
    fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet> {
        let set = Self::definitions()?;
        if set.matches_scope(scope) {
            Ok(set.clone())
        } else {
            Err(RegionError::NotFound(format!(
                "bundled dataset has no definitions for scope {scope}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_has_all_prefectures() {
        let set = BundledSource::definitions().unwrap();
        assert_eq!(set.len(), 47);
        assert_eq!(set.locale, "ja");
        assert_eq!(set.regions.first().map(|(id, _)| id.as_str()), Some("JP-01"));
        assert_eq!(set.regions.last().map(|(id, _)| id.as_str()), Some("JP-47"));
    }

    #[test]
    fn other_scopes_are_not_found() {
        let source = BundledSource;
        assert!(source.read_definitions(&Scope::root("JP")).is_ok());
        assert!(matches!(
            source.read_definitions(&Scope::root("US")),
            Err(RegionError::NotFound(_))
        ));
        assert!(source
            .read_definitions(&Scope::new("JP", Some("JP-13")))
            .is_err());
    }
}
