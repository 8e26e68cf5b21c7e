//! Message catalogs keyed by locale and error id

use crate::error::{RegistryError, RegistryResult};
use crate::render::{render, Arg};
use std::collections::HashMap;
use tracing::debug;

/// A single message template registered for an error id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    id: String,
    text: String,
}

impl MessageTemplate {
    /// Create a new template
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// The error id this template belongs to
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw template text, placeholders included
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render the template with positional arguments
    pub fn render(&self, args: &[Arg]) -> String {
        render(&self.text, args)
    }
}

/// Catalog of templates for every registered locale.
///
/// Entries are only ever added or overwritten; the last registration for a
/// `(locale, id)` pair wins.
#[derive(Debug, Default)]
pub struct CatalogStore {
    locales: HashMap<String, HashMap<String, MessageTemplate>>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw` as `id=template` lines and register them under `locale`.
    ///
    /// Lines are committed one at a time. The first line without `=` stops
    /// parsing and is reported; earlier lines of the same call stay registered.
    /// Empty lines are skipped. Returns the number of entries committed.
    pub fn register(&mut self, locale: &str, raw: &str) -> RegistryResult<usize> {
        let catalog = self.locales.entry(locale.to_string()).or_default();

        let mut committed = 0;
        for (index, line) in raw.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            let (id, text) = line.split_once('=').ok_or_else(|| RegistryError::Parse {
                locale: locale.to_string(),
                line: index + 1,
            })?;

            debug!("Register {} -> {}", locale, id);
            catalog.insert(id.to_string(), MessageTemplate::new(id, text));
            committed += 1;
        }

        Ok(committed)
    }

    /// Look up the template for `id` in exactly `locale`
    pub fn lookup(&self, locale: &str, id: &str) -> Option<&MessageTemplate> {
        self.locales.get(locale).and_then(|catalog| catalog.get(id))
    }

    /// Get the whole catalog of one locale
    pub fn catalog(&self, locale: &str) -> Option<&HashMap<String, MessageTemplate>> {
        self.locales.get(locale)
    }

    /// Check if a catalog exists for the locale
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// All registered locales, sorted
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Number of templates registered for a locale
    pub fn len(&self, locale: &str) -> usize {
        self.locales.get(locale).map_or(0, HashMap::len)
    }

    /// Whether no locale has been registered yet
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut store = CatalogStore::new();
        let count = store
            .register("en", "ERR00001=ID not found\nERR00004=Test message {0}")
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.lookup("en", "ERR00001").unwrap().text(), "ID not found");
        assert_eq!(store.lookup("en", "ERR00004").unwrap().id(), "ERR00004");
        assert!(store.lookup("de", "ERR00001").is_none());
    }

    #[test]
    fn test_text_keeps_everything_after_first_separator() {
        let mut store = CatalogStore::new();
        store.register("en", "EQ00001=a=b=c").unwrap();

        assert_eq!(store.lookup("en", "EQ00001").unwrap().text(), "a=b=c");
    }

    #[test]
    fn test_last_registration_wins() {
        let mut store = CatalogStore::new();
        store.register("en", "ERR00001=first").unwrap();
        store.register("en", "ERR00001=second").unwrap();

        assert_eq!(store.lookup("en", "ERR00001").unwrap().text(), "second");
    }

    #[test]
    fn test_empty_and_crlf_lines() {
        let mut store = CatalogStore::new();
        let count = store.register("en", "\r\nA=one\r\n\nB=two\r\n").unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.lookup("en", "A").unwrap().text(), "one");
        assert_eq!(store.lookup("en", "B").unwrap().text(), "two");
    }

    #[test]
    fn test_parse_error_keeps_earlier_lines() {
        let mut store = CatalogStore::new();
        let result = store.register("en", "A=one\nbroken line\nC=three");

        match result {
            Err(RegistryError::Parse { locale, line }) => {
                assert_eq!(locale, "en");
                assert_eq!(line, 2);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(store.lookup("en", "A").is_some());
        assert!(store.lookup("en", "C").is_none());
    }

    #[test]
    fn test_locale_exists_after_failed_first_line() {
        let mut store = CatalogStore::new();
        assert!(store.register("fr", "no separator").is_err());

        assert!(store.has_locale("fr"));
        assert_eq!(store.len("fr"), 0);
    }

    #[test]
    fn test_locales_sorted() {
        let mut store = CatalogStore::new();
        store.register("en", "A=a").unwrap();
        store.register("de", "A=a").unwrap();

        assert_eq!(store.locales(), vec!["de".to_string(), "en".to_string()]);
    }

    #[test]
    fn test_template_render() {
        assert_eq!(MessageTemplate::new("X", "abc").render(&[]), "abc");
        assert_eq!(
            MessageTemplate::new("X", "bcd {0} {1}").render(&[Arg::from("a"), Arg::from(1)]),
            "bcd a 1"
        );
    }
}
