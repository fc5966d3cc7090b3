//! Word list loading utilities
//!
//! Builds catalogs from the embedded list or from JSON / tab-separated files.

use super::embedded::EmbeddedWord;
use crate::core::{Catalog, CatalogError, WordRecord};
use std::fs;
use std::path::Path;

/// Load a catalog from a file
///
/// Files ending in `.tsv` or `.txt` are read as tab-separated
/// `word, part of speech, definition, example` lines; anything else is read
/// as a JSON array of records. Entries with a blank headword are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails to parse, or yields no
/// usable records.
///
/// # Examples
/// ```no_run
/// use vocab_shuffle::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_tabular = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("txt"));

    let records = if is_tabular {
        parse_tsv(&content)?
    } else {
        parse_json(&content)?
    };

    log::info!("Loaded {} words from {}", records.len(), path.display());
    Catalog::new(records)
}

/// Parse a JSON array of word records
///
/// Accepts both long keys (`word`, `partOfSpeech`, `definition`, `example`)
/// and short keys (`w`, `pos`, `d`, `e`).
///
/// # Errors
///
/// Returns `CatalogError::Json` if the text is not an array of records.
pub fn parse_json(content: &str) -> Result<Vec<WordRecord>, CatalogError> {
    let raw: Vec<WordRecord> = serde_json::from_str(content)?;

    let records = raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match record.normalized() {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping word list entry {}: {e}", i + 1);
                None
            }
        })
        .collect();

    Ok(records)
}

/// Parse tab-separated word records
///
/// Blank lines and lines starting with `#` are ignored. Missing or empty
/// trailing columns are treated as absent fields.
///
/// # Errors
///
/// Returns `CatalogError::Tsv` if a line has more than four columns.
pub fn parse_tsv(content: &str) -> Result<Vec<WordRecord>, CatalogError> {
    let mut records = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() > 4 {
            return Err(CatalogError::Tsv {
                line: line_no,
                reason: format!("expected at most 4 columns, found {}", columns.len()),
            });
        }

        let Ok(mut record) = WordRecord::new(columns[0]) else {
            log::warn!("Skipping line {line_no}: empty headword");
            continue;
        };
        if let Some(&tag) = columns.get(1) {
            record = record.with_part_of_speech(tag);
        }
        if let Some(&definition) = columns.get(2) {
            record = record.with_definition(definition);
        }
        if let Some(&example) = columns.get(3) {
            record = record.with_example(example);
        }
        records.push(record);
    }

    Ok(records)
}

/// Convert the embedded list to owned records
///
/// # Examples
/// ```
/// use vocab_shuffle::wordlists::loader::records_from_embedded;
/// use vocab_shuffle::wordlists::WORDS;
///
/// let records = records_from_embedded(WORDS);
/// assert_eq!(records.len(), WORDS.len());
/// ```
#[must_use]
pub fn records_from_embedded(entries: &[EmbeddedWord]) -> Vec<WordRecord> {
    entries.iter().filter_map(EmbeddedWord::to_record).collect()
}
