//! `subsync vocab` handlers.

use std::path::{Path, PathBuf};

use anyhow::Result;

use subsync::vocab::VocabularyBook;
use subsync::Config;

/// List saved words with their context.
pub fn handle_list() -> Result<()> {
    let config = Config::load()?;
    let book = VocabularyBook::load(&config.vocabulary_file);

    if book.entries().is_empty() {
        println!("No saved words yet ({}).", book.path().display());
        return Ok(());
    }

    for entry in book.entries() {
        println!(
            "{:<20} @ {}  [{}]",
            entry.word, entry.timestamp_formatted, entry.source_file
        );
        println!("    {}", entry.sentence.replace('\n', " / "));
    }

    let stats = book.stats();
    println!();
    println!(
        "{} saves, {} unique words",
        stats.total_saves, stats.unique_words
    );
    Ok(())
}

/// Export the vocabulary book to CSV.
pub fn handle_export(output: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let book = VocabularyBook::load(&config.vocabulary_file);

    let output: PathBuf = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("vocabulary.csv"));
    book.export_csv(&output)?;

    println!(
        "Exported {} entries to {}",
        book.entries().len(),
        output.display()
    );
    Ok(())
}
