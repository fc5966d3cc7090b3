//! Clipboard output
//!
//! Copies text to the system clipboard through the terminal's OSC 52 escape
//! sequence. Copy failures are never surfaced as errors.

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use std::io::{self, Write};

/// Destination for copied text
pub trait Clipboard {
    /// Place `text` on the clipboard
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the text could not be delivered.
    fn set_text(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard backed by an OSC 52 sequence written to a terminal
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl Osc52Clipboard<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))
    }
}

/// Copy `text`, swallowing any failure
///
/// Returns whether the copy was delivered, so callers can acknowledge it.
pub fn copy_quietly<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.set_text(text) {
        Ok(()) => {
            log::debug!("Copied {} bytes to clipboard", text.len());
            true
        }
        Err(e) => {
            log::debug!("Clipboard write failed: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> io::Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn copy_quietly_reports_success() {
        let mut clipboard = RecordingClipboard::default();
        assert!(copy_quietly(&mut clipboard, "terse"));
        assert_eq!(clipboard.copied, ["terse"]);
    }

    #[test]
    fn copy_quietly_swallows_failure() {
        let mut clipboard = BrokenClipboard;
        assert!(!copy_quietly(&mut clipboard, "terse"));
    }

    #[test]
    fn osc52_writes_encoded_payload() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.set_text("terse").unwrap();

        let written = String::from_utf8(clipboard.out).unwrap();
        assert!(written.contains("]52;"));
        assert!(written.contains("dGVyc2U="));
    }
}
