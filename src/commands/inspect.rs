//! `subsync inspect` handler: parse a file and report what was found.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use subsync::srt::{self, ms_to_timestamp};

/// How many leading cues to print as a preview.
const PREVIEW_CUES: usize = 5;

pub fn handle(file: &Path) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let decoded = srt::decode(&bytes)?;
    let outcome = srt::parse_str(&decoded.text);

    println!("file:      {}", file.display());
    println!("encoding:  {}", decoded.encoding);
    println!("cues:      {}", outcome.table.len());
    println!("duration:  {}", ms_to_timestamp(outcome.table.total_ms()));
    println!("skipped:   {}", outcome.skipped.len());

    for skip in &outcome.skipped {
        println!("  block {}: {}", skip.block_number, skip.reason);
    }

    if !outcome.table.is_empty() {
        println!();
        for cue in outcome.table.iter().take(PREVIEW_CUES) {
            println!(
                "[{} --> {}] {}",
                cue.start_formatted(),
                cue.end_formatted(),
                cue.text.replace('\n', " / ")
            );
        }
        if outcome.table.len() > PREVIEW_CUES {
            println!("... and {} more", outcome.table.len() - PREVIEW_CUES);
        }
    }

    Ok(())
}
