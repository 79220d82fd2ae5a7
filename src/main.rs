//! Word Masters - CLI
//!
//! Word guessing game with TUI and line-based modes, plus a one-shot scorer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use word_masters::{
    commands::{run_simple, score_words},
    config::{Config, SourceKind},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::print_scored,
    source::DEFAULT_API_URL,
};

#[derive(Parser)]
#[command(
    name = "word_masters",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: remote (default, words API) or offline (local word list)
    #[arg(long, global = true, value_enum, default_value_t = SourceKind::Remote, env = "WORD_MASTERS_SOURCE")]
    source: SourceKind,

    /// Base URL of the words API
    #[arg(long, global = true, default_value = DEFAULT_API_URL, env = "WORD_MASTERS_API_URL")]
    api_url: String,

    /// Ask the words API for a random word instead of the word of the day
    #[arg(long, global = true)]
    random: bool,

    /// Word list file for the offline source (one word per line)
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Request timeout for the words API, in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target and print the feedback
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            source: self.source,
            api_url: self.api_url.clone(),
            random: self.random,
            word_list: self.word_list.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match command {
        Commands::Play => LogTarget::file_or(config.log_file.as_deref(), LogTarget::Disabled),
        Commands::Simple | Commands::Score { .. } => {
            LogTarget::file_or(config.log_file.as_deref(), LogTarget::Stderr)
        }
    };
    logging::init(&config.log_level, log_target)?;

    match command {
        Commands::Play => run_tui(App::new(config.build_source()?)),
        Commands::Simple => run_simple(config.build_source()?).await,
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_words(guess, target)?;
    print_scored(&result.guess, &result.target, result.classification);
    Ok(())
}
