//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A small well-formed SRT file.
pub const SAMPLE_SRT: &str = "1\n\
00:00:01,000 --> 00:00:04,000\n\
Hello, welcome to the movie.\n\
\n\
2\n\
00:00:05,500 --> 00:00:08,200\n\
This is the second subtitle.\n\
It has two lines.\n\
\n\
3\n\
00:00:10,000 --> 00:00:12,500\n\
<i>This has italic tags</i>\n";

/// Write `bytes` to a temp file and return (dir guard, path).
pub fn temp_subtitle(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("write fixture");
    (dir, path)
}
