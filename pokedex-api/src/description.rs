use serde::Deserialize;

use crate::types::{FlavorTextEntry, SpeciesRecord};

/// Shown when no entry matches either locale.
pub const PLACEHOLDER_DESCRIPTION: &str = "Descripción no disponible";

pub const PRIMARY_LOCALE: &str = "es";
pub const FALLBACK_LOCALE: &str = "en";

/// Locale pair used to pick a flavor text entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocalePreference {
    pub primary: String,
    pub fallback: String,
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self {
            primary: PRIMARY_LOCALE.to_string(),
            fallback: FALLBACK_LOCALE.to_string(),
        }
    }
}

fn first_in<'a>(entries: &'a [FlavorTextEntry], language: &str) -> Option<&'a FlavorTextEntry> {
    entries.iter().find(|e| e.language.name == language)
}

/// Replaces each newline and form feed with a single space.
pub fn flatten_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| if matches!(c, '\n' | '\u{c}') { ' ' } else { c })
        .collect()
}

/// Picks the description for a species.
///
/// The first entry in the primary locale wins, then the first in the fallback
/// locale. A missing or empty text yields [`PLACEHOLDER_DESCRIPTION`].
pub fn select_description(species: &SpeciesRecord, locales: &LocalePreference) -> String {
    let entries = &species.flavor_text_entries;
    let text = first_in(entries, &locales.primary)
        .or_else(|| first_in(entries, &locales.fallback))
        .map(|e| flatten_flavor_text(&e.flavor_text))
        .unwrap_or_default();

    if text.is_empty() {
        PLACEHOLDER_DESCRIPTION.to_string()
    } else {
        text
    }
}
