//! Vocabulary persistence
//!
//! Stores clicked words with their cue context and video timestamp in a
//! JSON file for later review, and exports the collection as CSV for
//! flashcard import. This layer is a pure consumer of the sync engine's
//! events; it has no bearing on timing correctness.
//!
//! File layout:
//!
//! ```json
//! {
//!   "metadata": { "created": "...", "last_updated": "...", "total_words": 3 },
//!   "entries": [ { "word": "...", "sentence": "...", ... } ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::srt::ms_to_timestamp;

/// One saved word with its context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The clicked word.
    pub word: String,
    /// Full cue text for context.
    pub sentence: String,
    /// Position in the video, milliseconds.
    pub timestamp_ms: i64,
    /// Human readable position (`HH:MM:SS,mmm`).
    pub timestamp_formatted: String,
    /// Subtitle file the word came from.
    pub source_file: String,
    /// When the user saved the word (ISO 8601, local time).
    pub saved_at: String,
    /// Free-form user notes.
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Metadata {
    created: String,
    last_updated: String,
    total_words: usize,
}

impl Metadata {
    fn fresh() -> Self {
        let now = Local::now().to_rfc3339();
        Metadata {
            created: now.clone(),
            last_updated: now,
            total_words: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    metadata: Metadata,
    entries: Vec<VocabularyEntry>,
}

/// Aggregate counts for the status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyStats {
    pub total_saves: usize,
    pub unique_words: usize,
}

/// The on-disk vocabulary collection.
///
/// Every `add_word` persists immediately; the previous file is rotated
/// to `<path>.backup` first so a failed write cannot lose the book.
#[derive(Debug)]
pub struct VocabularyBook {
    path: PathBuf,
    metadata: Metadata,
    entries: Vec<VocabularyEntry>,
}

impl VocabularyBook {
    /// Load the book at `path`, or start a fresh one when the file is
    /// missing. A corrupt file is logged and replaced on the next save
    /// (the corrupt content survives as the `.backup`).
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return VocabularyBook {
                path,
                metadata: Metadata::fresh(),
                entries: Vec::new(),
            };
        }

        let parsed = fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| serde_json::from_str::<BookFile>(&content).map_err(Into::into));

        match parsed {
            Ok(file) => VocabularyBook {
                path,
                metadata: file.metadata,
                entries: file.entries,
            },
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "could not load vocabulary file, starting fresh"
                );
                VocabularyBook {
                    path,
                    metadata: Metadata::fresh(),
                    entries: Vec::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Save a clicked word and persist the book.
    pub fn add_word(
        &mut self,
        word: &str,
        sentence: &str,
        timestamp_ms: i64,
        source_file: &str,
    ) -> Result<&VocabularyEntry> {
        let entry = VocabularyEntry {
            word: word.to_string(),
            sentence: sentence.to_string(),
            timestamp_ms,
            timestamp_formatted: ms_to_timestamp(timestamp_ms),
            source_file: source_file.to_string(),
            saved_at: Local::now().to_rfc3339(),
            notes: String::new(),
        };
        self.entries.push(entry);
        self.save()?;
        Ok(self.entries.last().expect("entry just pushed"))
    }

    fn save(&mut self) -> Result<()> {
        self.metadata.last_updated = Local::now().to_rfc3339();
        self.metadata.total_words = self.entries.len();

        let file = BookFile {
            metadata: self.metadata.clone(),
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory {}", parent.display())
                })?;
            }
        }

        if self.path.exists() {
            let backup = self.path.with_extension("json.backup");
            // Best effort: a failed rotation should not block the save
            let _ = fs::rename(&self.path, &backup);
        }

        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Lowercased set of distinct saved words.
    pub fn unique_words(&self) -> HashSet<String> {
        self.entries
            .iter()
            .map(|e| e.word.to_lowercase())
            .collect()
    }

    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            total_saves: self.entries.len(),
            unique_words: self.unique_words().len(),
        }
    }

    /// Export the book as CSV (word, sentence, timestamp, source, saved
    /// at) suitable for flashcard import.
    pub fn export_csv<P: AsRef<Path>>(&self, output: P) -> Result<()> {
        let mut csv = String::from("word,sentence,timestamp,source_file,saved_at\n");
        for entry in &self.entries {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                csv_field(&entry.word),
                csv_field(&entry.sentence),
                csv_field(&entry.timestamp_formatted),
                csv_field(&entry.source_file),
                csv_field(&entry.saved_at),
            ));
        }
        fs::write(output.as_ref(), csv)
            .with_context(|| format!("failed to write {}", output.as_ref().display()))?;
        Ok(())
    }
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\"").replace('\n', " "))
}
