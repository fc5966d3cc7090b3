//! Simple interactive CLI mode
//!
//! Line-based word cards without the TUI

use crate::clipboard::{Clipboard, copy_quietly};
use crate::core::Catalog;
use crate::output::display::write_card;
use crate::sequencer::ShuffleSequencer;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A parsed line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    Next,
    ToggleDefinition,
    Copy,
    Reshuffle,
    Help,
    Quit,
    Unknown,
}

impl SimpleCommand {
    /// Parse one input line (an empty line means "next word")
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Self::Next,
            "d" | "def" | "definition" => Self::ToggleDefinition,
            "c" | "copy" => Self::Copy,
            "r" | "reshuffle" => Self::Reshuffle,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Reads commands line by line from `input` until `q` or end of input.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<R, C, I, W>(
    catalog: &Catalog,
    sequencer: &mut ShuffleSequencer<R>,
    clipboard: &mut C,
    mut input: I,
    mut output: W,
) -> io::Result<()>
where
    R: Rng,
    C: Clipboard + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Random SAT Word - Simple Mode                ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    write_help(&mut output)?;

    let mut show_definition = true;
    let mut current = sequencer.draw();
    write_card(&mut output, &catalog[current], show_definition)?;

    let mut line = String::new();
    loop {
        write!(output, "{} ", ">".bright_cyan().bold())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match SimpleCommand::parse(&line) {
            SimpleCommand::Next => {
                current = sequencer.draw();
                write_card(&mut output, &catalog[current], show_definition)?;
            }
            SimpleCommand::ToggleDefinition => {
                show_definition = !show_definition;
                write_card(&mut output, &catalog[current], show_definition)?;
            }
            SimpleCommand::Copy => {
                let text = catalog[current].copy_text();
                if copy_quietly(clipboard, &text) {
                    writeln!(output, "{} {text}", "✓ Copied:".green())?;
                }
            }
            SimpleCommand::Reshuffle => {
                sequencer.reset();
                writeln!(output, "🔄 Reshuffled {} words", sequencer.size())?;
            }
            SimpleCommand::Help => write_help(&mut output)?,
            SimpleCommand::Quit => break,
            SimpleCommand::Unknown => {
                writeln!(output, "{}", "Unknown command (h for help)".red())?;
            }
        }
    }

    writeln!(output, "👋 Goodbye!\n")?;
    Ok(())
}

fn write_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    writeln!(output, "  Enter / n   new word")?;
    writeln!(output, "  d           show/hide definition")?;
    writeln!(output, "  c           copy word to clipboard")?;
    writeln!(output, "  r           reshuffle the deck")?;
    writeln!(output, "  q           quit\n")
}
