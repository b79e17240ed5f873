// crates/jpregion-core/src/loader/mod.rs

//! # Definition Loaders
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates parsing to
//! [`DefinitionSet::from_reader`]. Each loader implements
//! [`DefinitionSource`]; none of them cache, that is the store's job.

use crate::error::{RegionError, Result};
use crate::model::DefinitionSet;
use crate::scope::Scope;
use crate::traits::DefinitionSource;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

mod bundled;
pub mod common_io;
mod memory;

#[cfg(feature = "bundled")]
pub use bundled::BundledSource;
pub use memory::StaticSource;

/// Country served when a lookup names no country.
pub const DEFAULT_COUNTRY: &str = "JP";

/// Directory holding the definition files shipped with this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Reads `<dir>/<key>.json` (or `<key>.json.gz`) for each scope, where `key`
/// is [`Scope::resource_key`]: `JP.json` for the prefectures of Japan,
/// `JP-13.json` for the subdivisions of Tokyo.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileSource { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate paths for `scope`, in lookup order.
    pub fn resource_paths(&self, scope: &Scope) -> Vec<PathBuf> {
        let key = scope.resource_key();
        let mut paths = vec![self.dir.join(format!("{key}.json"))];
        if cfg!(feature = "compact") {
            paths.push(self.dir.join(format!("{key}.json.gz")));
        }
        paths
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        JsonFileSource::new(default_data_dir())
    }
}

impl DefinitionSource for JsonFileSource {
    fn read_definitions(&self, scope: &Scope) -> Result<DefinitionSet> {
        if !is_plain_file_stem(scope.resource_key()) {
            return Err(RegionError::NotFound(format!(
                "scope {scope} does not name a file in {}",
                self.dir.display()
            )));
        }

        let paths = self.resource_paths(scope);
        let path = paths.iter().find(|p| p.is_file()).ok_or_else(|| {
            RegionError::NotFound(format!(
                "no definition file for scope {scope} in {}",
                self.dir.display()
            ))
        })?;

        debug!(path = %path.display(), %scope, "reading region definitions");
        let reader = common_io::open_stream(path)?;
        DefinitionSet::from_reader(reader)
    }
}

/// True if `key` is a single normal path component, so joining it onto the
/// data directory stays inside that directory.
fn is_plain_file_stem(key: &str) -> bool {
    if key.is_empty() || key.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(key).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
