use std::collections::BTreeMap;

use tracing::debug;

use super::{Language, Schema};

/// Per-language schemas with a mandatory base entry.
///
/// A language without an entry is "absent": resolution falls back to the
/// base schema alone.
#[derive(Debug, Clone)]
pub struct LocaleTable<'a> {
    base_language: Language,
    base: &'a Schema<'a>,
    locales: BTreeMap<Language, &'a Schema<'a>>,
}

impl<'a> LocaleTable<'a> {
    /// Table with an English base.
    pub fn new(base: &'a Schema<'a>) -> Self {
        Self::with_base_language(Language::English, base)
    }

    pub fn with_base_language(base_language: Language, base: &'a Schema<'a>) -> Self {
        Self {
            base_language,
            base,
            locales: BTreeMap::new(),
        }
    }

    /// Adds a localized schema. The base entry cannot be replaced.
    pub fn with_locale(mut self, language: Language, schema: &'a Schema<'a>) -> Self {
        if language == self.base_language {
            debug!(%language, "ignoring locale entry for the base language");
            return self;
        }
        self.locales.insert(language, schema);
        self
    }

    pub fn base_language(&self) -> Language {
        self.base_language
    }

    pub fn base(&self) -> &'a Schema<'a> {
        self.base
    }

    /// Schema registered for `language`, the base schema for the base language.
    pub fn get(&self, language: Language) -> Option<&'a Schema<'a>> {
        if language == self.base_language {
            return Some(self.base);
        }
        self.locales.get(&language).copied()
    }

    /// Languages with a localized schema, excluding the base.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.locales.keys().copied()
    }
}
