//! Translation tables for the supported cultures
//!
//! Each culture has a flat `key = "text"` table in `locales/<id>.toml`,
//! embedded into the binary and loaded once at startup. Lookups that miss
//! return the key itself.

use std::collections::HashMap;

use anyhow::Context;
use rust_embed::RustEmbed;
use rust_i18n::{Backend, SimpleBackend};

use crate::models::Culture;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct LocaleAssets;

pub struct Localizer {
    backend: SimpleBackend,
}

impl Localizer {
    /// Load the embedded tables for every supported culture.
    ///
    /// A culture without a table is allowed; all of its lookups fall back to the key.
    pub fn load() -> Result<Self, anyhow::Error> {
        let mut tables = HashMap::new();

        for culture in Culture::ALL {
            let filename = format!("{}.toml", culture.resource_id());
            let Some(file) = LocaleAssets::get(&filename) else {
                tracing::warn!("No translation table for {} ({})", culture, filename);
                continue;
            };

            let content = std::str::from_utf8(file.data.as_ref())
                .with_context(|| format!("{} is not valid UTF-8", filename))?;
            let table: HashMap<String, String> =
                toml::from_str(content).with_context(|| format!("Failed to parse {}", filename))?;

            tracing::debug!("Loaded {} translations for {}", table.len(), culture);
            tables.insert(culture, table);
        }

        Ok(Self::from_tables(tables))
    }

    pub fn from_tables(tables: HashMap<Culture, HashMap<String, String>>) -> Self {
        let mut backend = SimpleBackend::new();
        for (culture, table) in &tables {
            let data: HashMap<&str, &str> =
                table.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            backend.add_translations(culture.resource_id(), &data);
        }
        Self { backend }
    }

    /// Translate `key` into `culture`, or return `key` unchanged
    pub fn translate(&self, culture: Culture, key: &str) -> String {
        match self.backend.translate(culture.resource_id(), key) {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }
}
