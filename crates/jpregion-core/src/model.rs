// crates/jpregion-core/src/model.rs
use crate::error::Result;
use crate::scope::Scope;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// Locale-specific override of a definition's fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A region exactly as stored in the backing resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRegionDefinition {
    pub name: String,
    /// Short code distinct from the display name, if the source has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Overrides keyed by locale (e.g. `"en"`).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub translations: IndexMap<String, Translation>,
}

impl RawRegionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        RawRegionDefinition {
            name: name.into(),
            code: None,
            translations: IndexMap::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_translation(mut self, locale: impl Into<String>, translation: Translation) -> Self {
        self.translations.insert(locale.into(), translation);
        self
    }
}

/// All region definitions visible in one [`Scope`].
///
/// Key order of `regions` is the order of the resource and is the iteration
/// order of every list-style lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionSet {
    pub country_code: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub locale: String,
    #[serde(default)]
    pub regions: IndexMap<String, RawRegionDefinition>,
}

impl DefinitionSet {
    /// A set with no regions, standing in for "no data" in `scope`.
    pub fn empty(scope: &Scope) -> Self {
        DefinitionSet {
            country_code: scope.country_code.clone(),
            parent_id: scope.parent_id.clone(),
            locale: String::new(),
            regions: IndexMap::new(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn scope(&self) -> Scope {
        Scope::new(self.country_code.clone(), self.parent_id.as_deref())
    }

    /// True if this set was built for `scope` (parents equal to the country
    /// code count as root).
    pub fn matches_scope(&self, scope: &Scope) -> bool {
        self.scope() == *scope
    }

    pub fn get(&self, id: &str) -> Option<&RawRegionDefinition> {
        self.regions.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

/// An administrative region (e.g. a prefecture), resolved for one locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    id: String,
    country_code: String,
    parent_id: Option<String>,
    code: String,
    name: String,
    locale: String,
}

impl Region {
    pub fn new(
        id: impl Into<String>,
        country_code: impl Into<String>,
        parent_id: Option<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Region {
            id: id.into(),
            country_code: country_code.into(),
            parent_id,
            code: code.into(),
            name: name.into(),
            locale: locale.into(),
        }
    }

    /// Composite id, e.g. `JP-13`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Short code; equals [`Region::name`] when the source defines none.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base locale of the definition set the region came from.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKYO: &str = r#"{
        "country_code": "JP",
        "parent_id": null,
        "locale": "ja",
        "regions": {
            "JP-13": {"name": "東京都", "translations": {"en": {"name": "Tokyo"}}},
            "JP-01": {"name": "北海道", "code": "HK"}
        }
    }"#;

    #[test]
    fn parses_resource_shape() {
        let set = DefinitionSet::from_json_str(TOKYO).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.locale, "ja");
        assert!(set.matches_scope(&Scope::root("JP")));

        let tokyo = set.get("JP-13").unwrap();
        assert_eq!(tokyo.code, None);
        assert_eq!(tokyo.translations["en"].name.as_deref(), Some("Tokyo"));
        assert_eq!(set.get("JP-01").unwrap().code.as_deref(), Some("HK"));
    }

    #[test]
    fn keeps_resource_key_order() {
        let set = DefinitionSet::from_json_str(TOKYO).unwrap();
        let ids: Vec<&str> = set.regions.keys().map(String::as_str).collect();
        assert_eq!(ids, ["JP-13", "JP-01"]);
    }

    #[test]
    fn parent_id_may_be_omitted() {
        let set =
            DefinitionSet::from_json_str(r#"{"country_code":"JP","locale":"ja","regions":{}}"#)
                .unwrap();
        assert_eq!(set.parent_id, None);
        assert!(set.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(DefinitionSet::from_json_str("{not json").is_err());
        assert!(DefinitionSet::from_json_str(r#"{"regions":{}}"#).is_err());
    }

    #[test]
    fn region_display() {
        let r = Region::new("JP-13", "JP", None, "Tokyo", "Tokyo", "ja");
        assert_eq!(r.to_string(), "Tokyo (JP-13)");
        assert_eq!(r.parent_id(), None);
    }
}
