//! `subsync play` handler.

use std::path::Path;

use anyhow::{Context, Result};

use subsync::player;
use subsync::srt;
use subsync::vocab::VocabularyBook;
use subsync::Config;

/// Load a subtitle file and run the player loop over it.
pub fn handle(file: &Path, offset_ms: i64) -> Result<()> {
    let config = Config::load()?;

    let outcome = srt::load(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    if !outcome.skipped.is_empty() {
        eprintln!(
            "warning: skipped {} malformed block(s), run `subsync inspect` for details",
            outcome.skipped.len()
        );
    }
    if outcome.table.is_empty() {
        eprintln!("warning: no subtitles found in file");
    }

    let source_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let vocab = VocabularyBook::load(&config.vocabulary_file);

    player::play_file(outcome.table, &source_name, &config, vocab, offset_ms)
}
