//! Vocabulary word record
//!
//! A `WordRecord` is one card in the catalog: a headword plus optional
//! part of speech, definition and example sentence.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single vocabulary entry
///
/// The headword is always present and non-blank. Optional fields that are
/// blank are stored as `None`, so callers never have to check for empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    #[serde(alias = "w")]
    word: String,
    #[serde(default, alias = "pos", alias = "part_of_speech")]
    part_of_speech: Option<String>,
    #[serde(default, alias = "d")]
    definition: Option<String>,
    #[serde(default, alias = "e")]
    example: Option<String>,
}

/// Error type for invalid records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word record must have a non-empty headword")]
    EmptyWord,
}

impl WordRecord {
    /// Create a record with only a headword
    ///
    /// The headword is trimmed.
    ///
    /// # Errors
    /// Returns `WordError::EmptyWord` if the headword is blank.
    ///
    /// # Examples
    /// ```
    /// use vocab_shuffle::core::WordRecord;
    ///
    /// let record = WordRecord::new("  terse ").unwrap();
    /// assert_eq!(record.word(), "terse");
    /// assert!(record.definition().is_none());
    ///
    /// assert!(WordRecord::new("   ").is_err());
    /// ```
    pub fn new(word: impl Into<String>) -> Result<Self, WordError> {
        let word = word.into().trim().to_string();
        if word.is_empty() {
            return Err(WordError::EmptyWord);
        }

        Ok(Self {
            word,
            part_of_speech: None,
            definition: None,
            example: None,
        })
    }

    /// Set the part-of-speech tag (blank values are treated as absent)
    #[must_use]
    pub fn with_part_of_speech(mut self, tag: impl Into<String>) -> Self {
        self.part_of_speech = non_blank(tag.into());
        self
    }

    /// Set the definition (blank values are treated as absent)
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = non_blank(definition.into());
        self
    }

    /// Set the example sentence (blank values are treated as absent)
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = non_blank(example.into());
        self
    }

    /// Re-establish the record invariants after deserialization
    ///
    /// # Errors
    /// Returns `WordError::EmptyWord` if the headword is blank.
    pub(crate) fn normalized(self) -> Result<Self, WordError> {
        let mut record = Self::new(self.word)?;
        record.part_of_speech = self.part_of_speech.and_then(non_blank);
        record.definition = self.definition.and_then(non_blank);
        record.example = self.example.and_then(non_blank);
        Ok(record)
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Text written to the clipboard for this record
    ///
    /// Format is `word (part of speech) — definition`, omitting any segment
    /// whose field is absent.
    ///
    /// # Examples
    /// ```
    /// use vocab_shuffle::core::WordRecord;
    ///
    /// let lucid = WordRecord::new("lucid")
    ///     .unwrap()
    ///     .with_part_of_speech("adj.")
    ///     .with_definition("easily understood");
    /// assert_eq!(lucid.copy_text(), "lucid (adj.) — easily understood");
    /// ```
    #[must_use]
    pub fn copy_text(&self) -> String {
        let mut text = self.word.clone();
        if let Some(tag) = &self.part_of_speech {
            text.push_str(&format!(" ({tag})"));
        }
        if let Some(definition) = &self.definition {
            text.push_str(&format!(" — {definition}"));
        }
        text
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
