//! subsync CLI entry point.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "subsync",
    version,
    about = "Display SRT subtitles in sync with an external video player",
    long_about = "Load a subtitle file, press space when the movie starts, and nudge the\n\
                  offset until the lines match. Click a word to save it for review."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a subtitle file against an externally running video
    Play {
        /// Path to the .srt file
        file: PathBuf,
        /// Initial sync offset in milliseconds
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset_ms: i64,
    },
    /// Parse a subtitle file and report cues, encoding, and skipped blocks
    Inspect {
        /// Path to the .srt file
        file: PathBuf,
    },
    /// Manage saved vocabulary words
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// List saved words
    List,
    /// Export saved words as CSV (for flashcard import)
    Export {
        /// Output path (default: vocabulary.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { file, offset_ms } => commands::play::handle(&file, offset_ms),
        Commands::Inspect { file } => commands::inspect::handle(&file),
        Commands::Vocab { action } => match action {
            VocabAction::List => commands::vocab::handle_list(),
            VocabAction::Export { output } => commands::vocab::handle_export(output.as_deref()),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
