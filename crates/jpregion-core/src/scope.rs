// crates/jpregion-core/src/scope.rs

//! # Identifier Decomposition
//!
//! Region ids are composite: `JP-13` is prefecture `13` of country `JP`,
//! `JP-13-A1` is a child of `JP-13`. Dropping the last segment yields the
//! enclosing region; the first segment is always the country code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the segments of a region id.
pub const ID_SEPARATOR: char = '-';

/// The `(country_code, parent_id)` pair selecting one definition set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub country_code: String,
    pub parent_id: Option<String>,
}

impl Scope {
    /// Top-level scope of a country (no enclosing region).
    pub fn root(country_code: impl Into<String>) -> Self {
        Scope {
            country_code: country_code.into(),
            parent_id: None,
        }
    }

    /// Scope narrowed to `parent_id`.
    ///
    /// An empty parent, or one equal to the country code, is the root
    /// scope, so it is normalised to `None`.
    pub fn new(country_code: impl Into<String>, parent_id: Option<&str>) -> Self {
        let country_code = country_code.into();
        let parent_id = parent_id
            .filter(|p| !p.is_empty() && *p != country_code)
            .map(str::to_owned);
        Scope {
            country_code,
            parent_id,
        }
    }

    /// Derives the scope a region id lives in.
    ///
    /// Returns `None` when `id` has fewer than two segments. The id is taken
    /// literally: no trimming, no case folding.
    ///
    /// ```rust
    /// use jpregion_core::scope::Scope;
    ///
    /// assert_eq!(Scope::from_region_id("JP-13"), Some(Scope::root("JP")));
    /// assert_eq!(
    ///     Scope::from_region_id("JP-13-A1"),
    ///     Some(Scope::new("JP", Some("JP-13")))
    /// );
    /// assert_eq!(Scope::from_region_id("JP"), None);
    /// ```
    pub fn from_region_id(id: &str) -> Option<Self> {
        let (parent, _last) = id.rsplit_once(ID_SEPARATOR)?;
        let country_code = parent.split(ID_SEPARATOR).next().unwrap_or(parent);
        Some(Scope::new(country_code, Some(parent)))
    }

    /// Name of the backing resource for this scope: the parent id when
    /// present, the country code otherwise.
    pub fn resource_key(&self) -> &str {
        self.parent_id.as_deref().unwrap_or(&self.country_code)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent_id {
            Some(parent) => write!(f, "{}/{}", self.country_code, parent),
            None => f.write_str(&self.country_code),
        }
    }
}
