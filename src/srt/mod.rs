//! SRT subtitle parsing and cue model
//!
//! This module turns a subtitle-file byte stream into an ordered table of
//! timed text cues. The parser is deliberately tolerant: subtitle files in
//! the wild are inconsistently encoded and frequently malformed, so it
//! tries a fixed chain of text encodings before giving up and soft-skips
//! individual broken blocks instead of aborting the whole file.
//!
//! All times are signed integer milliseconds. Wall-clock values are
//! converted once at the boundary (see the `sync` module) and never
//! compared as floating point.

mod encoding;
mod error;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use encoding::{decode, Decoded, ATTEMPTED_ENCODINGS};
pub use error::{DecodeError, LoadError};

/// A single timed subtitle entry.
///
/// `index` is the position in the final sorted table, assigned by the
/// parser; index lines found in the input are ignored. `text` keeps the
/// original internal line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    pub index: usize,
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
}

impl Cue {
    /// Start time formatted as `HH:MM:SS,mmm`.
    pub fn start_formatted(&self) -> String {
        ms_to_timestamp(self.start_ms)
    }

    /// End time formatted as `HH:MM:SS,mmm`.
    pub fn end_formatted(&self) -> String {
        ms_to_timestamp(self.end_ms)
    }

    /// The cue text as whitespace-separated words, in display order.
    ///
    /// Line breaks count as separators, so word indices are stable across
    /// the whole cue regardless of how it is wrapped on screen.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Resolve a clicked word to the data the vocabulary collaborator
    /// needs: the word itself, the full cue text for context, and the cue
    /// start time.
    pub fn word_context(&self, word_index: usize) -> Option<WordContext<'_>> {
        let word = self.words().nth(word_index)?;
        Some(WordContext {
            word,
            text: &self.text,
            start_ms: self.start_ms,
        })
    }
}

/// A word resolved within a cue, handed to the vocabulary layer on click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordContext<'a> {
    pub word: &'a str,
    pub text: &'a str,
    pub start_ms: i64,
}

/// Ordered, immutable sequence of cues for one loaded file.
///
/// Sorted by `start_ms` with indices reassigned 0..N-1. Owned by the sync
/// engine after construction and replaced wholesale on reload, never
/// mutated in place. Overlapping cues are permitted; the lookup tie-break
/// lives in `sync::lookup`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueTable {
    cues: Vec<Cue>,
}

impl CueTable {
    /// Build a table from raw cues: sort defensively by start time and
    /// reassign sequential indices.
    pub fn from_cues(mut cues: Vec<Cue>) -> Self {
        // Stable sort keeps input order for equal starts, so the
        // lowest-index tie-break stays deterministic.
        cues.sort_by_key(|c| c.start_ms);
        for (i, cue) in cues.iter_mut().enumerate() {
            cue.index = i;
        }
        CueTable { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    /// End time of the last-ending cue, or 0 for an empty table.
    pub fn total_ms(&self) -> i64 {
        self.cues.iter().map(|c| c.end_ms).max().unwrap_or(0)
    }

    /// Serialize back to SRT text with 1-based indices.
    ///
    /// Parsing the result reproduces the same (start, end, text) sequence.
    pub fn to_srt_string(&self) -> String {
        let mut out = String::new();
        for cue in &self.cues {
            out.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                cue.index + 1,
                cue.start_formatted(),
                cue.end_formatted(),
                cue.text
            ));
        }
        out
    }
}

impl std::ops::Index<usize> for CueTable {
    type Output = Cue;

    fn index(&self, index: usize) -> &Cue {
        &self.cues[index]
    }
}

impl<'a> IntoIterator for &'a CueTable {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}

/// Why a block was dropped during parsing.
///
/// Soft skips are expected data, not errors: the parser keeps going and
/// reports them alongside the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("no time range line")]
    MissingTimeRange,
    #[error("unparseable time range: {0}")]
    InvalidTimeRange(String),
    #[error("end time precedes start time")]
    ReversedTimes,
    #[error("no text lines")]
    EmptyText,
}

/// A malformed block excluded from the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// 1-based position of the block in the input file.
    pub block_number: usize,
    pub reason: SkipReason,
}

/// Parser result: the cue table plus diagnostics for skipped blocks.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub table: CueTable,
    pub skipped: Vec<SkippedBlock>,
}

/// Parse raw file bytes, trying the encoding fallback chain first.
pub fn parse_bytes(bytes: &[u8]) -> Result<ParseOutcome, DecodeError> {
    let decoded = decode(bytes)?;
    tracing::debug!(encoding = decoded.encoding, "decoded subtitle file");
    Ok(parse_str(&decoded.text))
}

/// Read and parse a subtitle file from disk.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ParseOutcome, LoadError> {
    let bytes = fs::read(path.as_ref())?;
    Ok(parse_bytes(&bytes)?)
}

/// Parse decoded subtitle text.
///
/// Accepted block grammar, separated by one or more blank lines:
/// an optional bare numeric index line (ignored), a time range line
/// `HH:MM:SS,mmm --> HH:MM:SS,mmm` (comma or period before the millis,
/// hours may exceed 24), then the cue text lines. Blocks that do not fit
/// are skipped with a reason; zero valid blocks is a valid empty table.
pub fn parse_str(content: &str) -> ParseOutcome {
    let content = content.trim_start_matches('\u{feff}');

    let mut cues = Vec::new();
    let mut skipped = Vec::new();

    for (block_number, block) in split_blocks(content).into_iter().enumerate() {
        match parse_block(&block) {
            Ok((start_ms, end_ms, text)) => cues.push(Cue {
                index: 0, // reassigned by CueTable::from_cues
                start_ms,
                end_ms,
                text,
            }),
            Err(reason) => skipped.push(SkippedBlock {
                block_number: block_number + 1,
                reason,
            }),
        }
    }

    if !skipped.is_empty() {
        tracing::warn!(
            skipped = skipped.len(),
            parsed = cues.len(),
            "skipped malformed subtitle blocks"
        );
    }

    ParseOutcome {
        table: CueTable::from_cues(cues),
        skipped,
    }
}

/// Split the input into blocks of non-blank lines.
fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Parse one block into (start, end, text).
fn parse_block(lines: &[&str]) -> Result<(i64, i64, String), SkipReason> {
    let mut rest = lines;

    // Optional bare index line. Not trusted: indices are reassigned.
    if let Some(first) = rest.first() {
        let trimmed = first.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) && rest.len() > 1 {
            rest = &rest[1..];
        }
    }

    let time_line = rest.first().ok_or(SkipReason::MissingTimeRange)?;
    let (start_ms, end_ms) = parse_time_range(time_line)
        .ok_or_else(|| time_range_skip_reason(time_line))?;

    if end_ms < start_ms {
        return Err(SkipReason::ReversedTimes);
    }

    let text_lines: Vec<String> = rest[1..]
        .iter()
        .map(|line| strip_tags(line.trim_end()))
        .collect();
    let text = text_lines.join("\n").trim().to_string();

    if text.is_empty() {
        return Err(SkipReason::EmptyText);
    }

    Ok((start_ms, end_ms, text))
}

fn time_range_skip_reason(line: &str) -> SkipReason {
    if line.contains("-->") {
        SkipReason::InvalidTimeRange(line.trim().to_string())
    } else {
        SkipReason::MissingTimeRange
    }
}

/// Parse a `start --> end` line. Trailing material after the end
/// timestamp (position hints etc.) is ignored.
fn parse_time_range(line: &str) -> Option<(i64, i64)> {
    let (left, right) = line.split_once("-->")?;
    let start = timestamp_to_ms(left.trim())?;
    let end_token = right.trim().split_whitespace().next()?;
    let end = timestamp_to_ms(end_token)?;
    Some((start, end))
}

/// Convert an SRT timestamp (`HH:MM:SS,mmm` or `HH:MM:SS.mmm`) to
/// milliseconds. Hours may exceed 24.
pub fn timestamp_to_ms(timestamp: &str) -> Option<i64> {
    let mut parts = timestamp.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    let rest = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let (seconds, millis) = rest
        .split_once(',')
        .or_else(|| rest.split_once('.'))?;

    if hours.is_empty() || minutes.len() != 2 || seconds.len() != 2 || millis.len() != 3 {
        return None;
    }

    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    let seconds: i64 = seconds.parse().ok()?;
    let millis: i64 = millis.parse().ok()?;

    Some(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}

/// Format milliseconds as an SRT timestamp `HH:MM:SS,mmm`.
pub fn ms_to_timestamp(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Remove HTML-style tags (`<i>`, `<b>`, ...) from a text line.
///
/// A `<` without a matching `>` is kept literally, as is the empty `<>`.
fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('<') {
        match rest[open + 1..].find('>') {
            Some(0) => {
                // Empty "<>" is not a tag
                out.push_str(&rest[..open + 2]);
                rest = &rest[open + 2..];
            }
            Some(len) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + len + 2..];
            }
            None => {
                out.push_str(rest);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
