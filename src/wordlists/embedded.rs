//! Embedded word list
//!
//! Vocabulary compiled into the binary at build time.

use crate::core::WordRecord;

/// A word list entry stored in the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedWord {
    pub word: &'static str,
    pub part_of_speech: Option<&'static str>,
    pub definition: Option<&'static str>,
    pub example: Option<&'static str>,
}

impl EmbeddedWord {
    /// Convert into an owned record, or `None` if the headword is blank
    #[must_use]
    pub fn to_record(&self) -> Option<WordRecord> {
        let mut record = WordRecord::new(self.word).ok()?;
        if let Some(tag) = self.part_of_speech {
            record = record.with_part_of_speech(tag);
        }
        if let Some(definition) = self.definition {
            record = record.with_definition(definition);
        }
        if let Some(example) = self.example {
            record = record.with_example(example);
        }
        Some(record)
    }
}

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
