// crates/jpregion-core/src/translate.rs

//! Locale selection over raw definitions, shared by every lookup path.

use crate::model::RawRegionDefinition;

/// Name and code of a definition resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated<'a> {
    pub name: &'a str,
    /// Never empty: falls back to `name`.
    pub code: &'a str,
}

/// Resolves `definition` for `locale`.
///
/// An override is used only when its key equals `locale` exactly. Override
/// fields replace base fields one by one, so an override with only a `name`
/// keeps the base `code`. Without a locale the base fields are used.
///
/// ```rust
/// use jpregion_core::model::{RawRegionDefinition, Translation};
/// use jpregion_core::translate::translate_definition;
///
/// let def = RawRegionDefinition::new("東京都").with_translation(
///     "en",
///     Translation { name: Some("Tokyo".into()), code: None },
/// );
///
/// assert_eq!(translate_definition(&def, Some("en")).name, "Tokyo");
/// assert_eq!(translate_definition(&def, Some("en-US")).name, "東京都");
/// assert_eq!(translate_definition(&def, None).code, "東京都");
/// ```
pub fn translate_definition<'a>(
    definition: &'a RawRegionDefinition,
    locale: Option<&str>,
) -> Translated<'a> {
    let overrides = locale.and_then(|l| definition.translations.get(l));

    let name = overrides
        .and_then(|t| t.name.as_deref())
        .unwrap_or(definition.name.as_str());
    let code = overrides
        .and_then(|t| non_empty(t.code.as_deref()))
        .or_else(|| non_empty(definition.code.as_deref()))
        .unwrap_or(name);

    Translated { name, code }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
