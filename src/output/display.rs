//! Display functions for command results

use super::formatters::{badge, create_progress_bar, example_line};
use crate::commands::{DrawResult, SimulationResult};
use crate::core::WordRecord;
use crate::sequencer::SeamPolicy;
use colored::Colorize;
use std::io::{self, Write};

/// Write a word card
///
/// When `show_definition` is false only the headword and badge are shown.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_card<W: Write>(out: &mut W, record: &WordRecord, show_definition: bool) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    match badge(record) {
        Some(tag) => writeln!(
            out,
            "  {}  {}",
            record.word().bright_yellow().bold(),
            tag.bright_black()
        )?,
        None => writeln!(out, "  {}", record.word().bright_yellow().bold())?,
    }

    if show_definition {
        if let Some(definition) = record.definition() {
            writeln!(out, "\n  {definition}")?;
        }
        if let Some(example) = example_line(record) {
            writeln!(out, "  {}", example.italic().bright_black())?;
        }
    } else {
        writeln!(out, "\n  {}", "(definition hidden, d to show)".bright_black())?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print the result of a draw run
///
/// With `plain`, each card is printed as its copy text on one line.
pub fn print_draw_result(result: &DrawResult, plain: bool) {
    if plain {
        for card in &result.cards {
            println!("{}", card.record.copy_text());
        }
        return;
    }

    let mut stdout = io::stdout();
    for card in &result.cards {
        println!(
            "\n{} {}",
            format!("#{}", card.position).bright_cyan().bold(),
            format!("(cycle {}, word {}/{})", card.cycle, card.index + 1, result.catalog_size)
                .bright_black()
        );
        if let Err(e) = write_card(&mut stdout, &card.record, true) {
            log::warn!("Failed to write card: {e}");
            return;
        }
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SEQUENCER SIMULATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let policy = match result.policy {
        SeamPolicy::Allow => "allow seam repeats",
        SeamPolicy::AvoidRepeat => "avoid seam repeats",
    };

    println!("\n📊 {}", "Cycles:".bright_cyan().bold());
    println!("   Words per cycle:  {}", result.size);
    println!("   Seam policy:      {policy}");
    println!("   Cycles checked:   {}", result.cycles_checked);
    let coverage = if result.coverage_ok() {
        "all complete".green().bold()
    } else {
        format!("{} incomplete", result.incomplete_cycles).red().bold()
    };
    println!("   Coverage:         {coverage}");
    println!(
        "   Seam repeats:     {} of {}",
        result.seam_repeats,
        result.cycles_checked.saturating_sub(1)
    );

    if result.trials > 0 {
        println!("\n📈 {}", "First draws:".bright_cyan().bold());
        println!("   Trials:           {}", result.trials);
        println!(
            "   Distinct values:  {}",
            format!("{}/{}", result.distinct_first_values(), result.size).bright_yellow()
        );

        let mut counts: Vec<(usize, usize)> = result
            .first_draw_counts
            .iter()
            .map(|(&index, &count)| (index, count))
            .collect();
        counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let max = counts.first().map_or(1, |&(_, count)| count);
        for (index, count) in counts.iter().take(10) {
            let pct = *count as f64 / result.trials as f64 * 100.0;
            let bar = create_progress_bar(*count as f64, max as f64, 30);
            println!("   {index:>5}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    println!(
        "\n   Time taken:       {:.3}s ({:.0} draws/s)",
        result.duration.as_secs_f64(),
        result.draws_per_second
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record: &WordRecord, show_definition: bool) -> String {
        let mut out = Vec::new();
        write_card(&mut out, record, show_definition).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn card_shows_all_fields() {
        let record = WordRecord::new("abate")
            .unwrap()
            .with_part_of_speech("v.")
            .with_definition("to lessen")
            .with_example("The storm abated.");
        let text = render(&record, true);
        assert!(text.contains("abate"));
        assert!(text.contains("[v.]"));
        assert!(text.contains("to lessen"));
        assert!(text.contains("e.g., The storm abated."));
    }

    #[test]
    fn card_hides_definition() {
        let record = WordRecord::new("abate")
            .unwrap()
            .with_definition("to lessen")
            .with_example("The storm abated.");
        let text = render(&record, false);
        assert!(text.contains("abate"));
        assert!(!text.contains("to lessen"));
        assert!(!text.contains("e.g.,"));
        assert!(text.contains("definition hidden"));
    }

    #[test]
    fn card_without_optional_fields() {
        let text = render(&WordRecord::new("terse").unwrap(), true);
        assert!(text.contains("terse"));
        assert!(!text.contains('['));
        assert!(!text.contains("e.g.,"));
    }
}
