//! Word catalog
//!
//! An immutable, non-empty, ordered list of word records with indexed lookup.

use super::record::WordRecord;
use std::ops::Index;
use thiserror::Error;

/// Ordered, fixed collection of vocabulary records
///
/// A catalog always holds at least one record, so every index handed out by a
/// sequencer built from `len()` resolves to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<WordRecord>,
}

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The word list contained no usable records.
    #[error("Word list is empty: at least one word is required")]
    Empty,

    /// The word list file could not be read.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// The word list file is not valid JSON of the expected shape.
    #[error("Invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),

    /// A tab-separated line could not be parsed.
    #[error("Invalid word list entry on line {line}: {reason}")]
    Tsv { line: usize, reason: String },
}

impl Catalog {
    /// Build a catalog from records, preserving their order
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if `records` is empty.
    ///
    /// # Examples
    /// ```
    /// use vocab_shuffle::core::{Catalog, WordRecord};
    ///
    /// let catalog = Catalog::new(vec![WordRecord::new("lucid").unwrap()]).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert!(Catalog::new(Vec::new()).is_err());
    /// ```
    pub fn new(records: Vec<WordRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { records })
    }

    /// Number of records (always at least 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.records.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = WordRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
