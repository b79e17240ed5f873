// crates/jpregion-core/src/loader/memory.rs
use crate::error::{RegionError, Result};
use crate::model::DefinitionSet;
use crate::scope::Scope;
use crate::traits::DefinitionSource;
use std::collections::HashMap;

/// In-memory definitions, keyed by the scope each set declares.
///
/// Useful for fixtures and for datasets assembled at runtime.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    sets: HashMap<Scope, DefinitionSet>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `set` under its own scope, replacing any previous set there.
    pub fn with_set(mut self, set: DefinitionSet) -> Self {
        self.insert(set);
        self
    }

    pub fn insert(&mut self, set: DefinitionSet) {
        self.sets.insert(set.scope(), set);
    }
}

impl FromIterator<DefinitionSet> for StaticSource {
    fn from_iter<I: IntoIterator<Item = DefinitionSet>>(iter: I) -> Self {
        let mut source = StaticSource::new();
        for set in iter {
            source.insert(set);
        }
        source
    }
}

impl DefinitionSource for StaticSource {
    fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet> {
        self.sets
            .get(scope)
            .cloned()
            .ok_or_else(|| RegionError::NotFound(format!("no definitions for scope {scope}")))
    }
}
