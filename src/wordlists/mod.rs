//! Word lists for vocabulary cards
//!
//! Provides the embedded word list compiled into the binary, plus loading of
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{EmbeddedWord, WORDS, WORDS_COUNT};

use crate::core::{Catalog, CatalogError};

/// Name accepted by `load_catalog` for the built-in list
pub const BUILTIN: &str = "sat";

/// Resolve a `--wordlist` value to a catalog
///
/// `"sat"` selects the embedded list; any other value is treated as a path.
///
/// # Errors
///
/// Returns an error if a custom list cannot be loaded or is empty.
pub fn load_catalog(source: &str) -> Result<Catalog, CatalogError> {
    if source == BUILTIN {
        log::debug!("Using embedded word list ({WORDS_COUNT} words)");
        Catalog::new(loader::records_from_embedded(WORDS))
    } else {
        loader::load_from_file(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_is_not_empty() {
        assert!(WORDS_COUNT > 0);
    }

    #[test]
    fn embedded_words_have_headwords() {
        for entry in WORDS {
            assert!(!entry.word.trim().is_empty(), "Blank headword in embedded list");
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: rustc_hash::FxHashSet<&str> = WORDS.iter().map(|e| e.word).collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_contains_lucid() {
        let lucid = WORDS.iter().find(|e| e.word == "lucid").unwrap();
        assert_eq!(lucid.part_of_speech, Some("adj."));
        assert_eq!(lucid.definition, Some("easily understood"));
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = load_catalog(BUILTIN).unwrap();
        assert_eq!(catalog.len(), WORDS_COUNT);
    }
}
