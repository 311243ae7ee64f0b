//! End-to-end parser tests: file loading, encoding fallback, diagnostics.

use subsync::srt::{self, SkipReason};

use crate::helpers::{temp_subtitle, SAMPLE_SRT};

// ============================================================================
// Loading from disk
// ============================================================================

#[test]
fn load_parses_utf8_file() {
    let (_dir, path) = temp_subtitle("movie.srt", SAMPLE_SRT.as_bytes());
    let outcome = srt::load(&path).unwrap();

    assert_eq!(outcome.table.len(), 3);
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.table[0].text, "Hello, welcome to the movie.");
}

#[test]
fn load_missing_file_is_io_error() {
    let err = srt::load("/nonexistent/path/movie.srt").unwrap_err();
    assert!(matches!(err, srt::LoadError::Io(_)));
}

#[test]
fn load_file_with_utf8_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SAMPLE_SRT.as_bytes());
    let (_dir, path) = temp_subtitle("bom.srt", &bytes);

    let outcome = srt::load(&path).unwrap();
    assert_eq!(outcome.table.len(), 3);
    // The BOM must not leak into the first cue
    assert!(outcome.table[0].text.starts_with("Hello"));
}

// ============================================================================
// Encoding fallback
// ============================================================================

#[test]
fn load_latin1_file_preserves_text() {
    // "café" with Latin-1 byte 0xE9, invalid as UTF-8
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"1\n00:00:01,000 --> 00:00:02,000\ncaf");
    bytes.push(0xE9);
    bytes.push(b'\n');
    let (_dir, path) = temp_subtitle("latin1.srt", &bytes);

    let outcome = srt::load(&path).unwrap();
    assert_eq!(outcome.table.len(), 1);
    assert_eq!(outcome.table[0].text, "café");
}

#[test]
fn decode_reports_winning_encoding() {
    let decoded = srt::decode("plain ascii".as_bytes()).unwrap();
    assert_eq!(decoded.encoding, "utf-8");

    let decoded = srt::decode(&[b'a', 0xFC, b'b']).unwrap();
    assert_eq!(decoded.encoding, "latin-1");
    assert_eq!(decoded.text, "aüb");
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn mixed_file_keeps_good_blocks_and_reports_bad_ones() {
    let src = "\
1
00:00:01,000 --> 00:00:02,000
good one

2
garbage time line
bad one

3
00:00:09,000 --> 00:00:03,000
reversed

4
00:00:10,000 --> 00:00:11,000
good two
";
    let (_dir, path) = temp_subtitle("mixed.srt", src.as_bytes());
    let outcome = srt::load(&path).unwrap();

    assert_eq!(outcome.table.len(), 2);
    assert_eq!(outcome.table[0].text, "good one");
    assert_eq!(outcome.table[1].text, "good two");

    assert_eq!(outcome.skipped.len(), 2);
    assert_eq!(outcome.skipped[0].block_number, 2);
    assert_eq!(outcome.skipped[0].reason, SkipReason::MissingTimeRange);
    assert_eq!(outcome.skipped[1].block_number, 3);
    assert_eq!(outcome.skipped[1].reason, SkipReason::ReversedTimes);
}

#[test]
fn zero_valid_blocks_is_empty_table_not_error() {
    let (_dir, path) = temp_subtitle("empty.srt", b"\n\n\n");
    let outcome = srt::load(&path).unwrap();
    assert!(outcome.table.is_empty());
    assert!(outcome.skipped.is_empty());
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn parse_serialize_parse_is_stable() {
    let first = srt::parse_str(SAMPLE_SRT);
    let serialized = first.table.to_srt_string();
    let second = srt::parse_str(&serialized);

    let a: Vec<_> = first
        .table
        .iter()
        .map(|c| (c.start_ms, c.end_ms, c.text.clone()))
        .collect();
    let b: Vec<_> = second
        .table
        .iter()
        .map(|c| (c.start_ms, c.end_ms, c.text.clone()))
        .collect();
    assert_eq!(a, b);
}
