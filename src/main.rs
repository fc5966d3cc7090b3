//! Vocab Shuffle - CLI
//!
//! Random vocabulary flashcards with TUI and CLI modes. Every word is shown
//! once before any word repeats.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vocab_shuffle::{
    clipboard::Osc52Clipboard,
    commands::{SimulationConfig, draw_words, run_simple, run_simulation},
    core::Catalog,
    output::{print_draw_result, print_simulation_result},
    sequencer::{SeamPolicy, SequencerConfig, ShuffleSequencer},
    wordlists::load_catalog,
};

#[derive(Parser)]
#[command(
    name = "vocab_shuffle",
    about = "Random vocabulary flashcards: every word once before any repeats",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'sat' (default, built-in) or path to a .json / .tsv file
    #[arg(short = 'w', long, global = true, default_value = "sat")]
    wordlist: String,

    /// Seed for a reproducible word order
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Never show the same word twice in a row across reshuffles
    #[arg(long, global = true)]
    no_repeat: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Print a number of random words and exit
    Draw {
        /// Number of words to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// One line per word in clipboard format
        #[arg(short, long)]
        plain: bool,
    },

    /// Audit the shuffle: per-round coverage and first-draw spread
    Simulate {
        /// Full rounds to check on one shuffled deck
        #[arg(short, long, default_value = "1000")]
        cycles: usize,

        /// Independent decks whose first word is recorded
        #[arg(short, long, default_value = "1000")]
        trials: usize,
    },
}

fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }))
    .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(&cli.wordlist)
        .with_context(|| format!("Failed to load word list '{}'", cli.wordlist))?;
    log::info!("Catalog ready: {} words", catalog.len());

    let policy = if cli.no_repeat {
        SeamPolicy::AvoidRepeat
    } else {
        SeamPolicy::Allow
    };
    let config = SequencerConfig::new(cli.seed, policy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&catalog, config),
        Commands::Simple => run_simple_command(&catalog, config),
        Commands::Draw { count, plain } => run_draw_command(&catalog, config, count, plain),
        Commands::Simulate { cycles, trials } => {
            run_simulate_command(&catalog, config, cycles, trials)
        }
    }
}

fn build_sequencer(catalog: &Catalog, config: SequencerConfig) -> Result<ShuffleSequencer> {
    ShuffleSequencer::from_config(catalog.len(), config).context("Cannot shuffle word list")
}

fn run_play_command(catalog: &Catalog, config: SequencerConfig) -> Result<()> {
    use vocab_shuffle::interactive::{App, run_tui};

    let app = App::new(catalog, build_sequencer(catalog, config)?);
    run_tui(app)
}

fn run_simple_command(catalog: &Catalog, config: SequencerConfig) -> Result<()> {
    let mut sequencer = build_sequencer(catalog, config)?;
    let mut clipboard = Osc52Clipboard::stdout();
    let stdin = std::io::stdin();

    run_simple(
        catalog,
        &mut sequencer,
        &mut clipboard,
        stdin.lock(),
        std::io::stdout(),
    )
    .context("Simple mode I/O failed")
}

fn run_draw_command(
    catalog: &Catalog,
    config: SequencerConfig,
    count: usize,
    plain: bool,
) -> Result<()> {
    let mut sequencer = build_sequencer(catalog, config)?;
    let result = draw_words(catalog, &mut sequencer, count);
    print_draw_result(&result, plain);
    Ok(())
}

fn run_simulate_command(
    catalog: &Catalog,
    config: SequencerConfig,
    cycles: usize,
    trials: usize,
) -> Result<()> {
    println!(
        "Simulating {cycles} rounds and {trials} independent decks over {} words...",
        catalog.len()
    );

    let simulation = SimulationConfig {
        seed: config.seed,
        policy: config.policy,
        show_progress: true,
        ..SimulationConfig::new(cycles, trials)
    };
    let result = run_simulation(catalog.len(), &simulation).context("Simulation failed")?;
    print_simulation_result(&result);
    Ok(())
}
