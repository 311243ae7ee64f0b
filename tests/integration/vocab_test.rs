//! Vocabulary persistence round trips.

use std::fs;

use subsync::vocab::VocabularyBook;

#[test]
fn book_file_format_has_metadata_and_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");

    let mut book = VocabularyBook::load(&path);
    book.add_word("bonjour", "Bonjour, le monde.", 12_500, "movie.srt")
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["metadata"]["total_words"], 1);
    assert!(json["metadata"]["created"].is_string());
    assert_eq!(json["entries"][0]["word"], "bonjour");
    assert_eq!(json["entries"][0]["timestamp_ms"], 12_500);
    assert_eq!(json["entries"][0]["timestamp_formatted"], "00:00:12,500");
    assert_eq!(json["entries"][0]["source_file"], "movie.srt");
}

#[test]
fn entries_accumulate_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");

    {
        let mut book = VocabularyBook::load(&path);
        book.add_word("un", "un mot", 1_000, "a.srt").unwrap();
    }
    {
        let mut book = VocabularyBook::load(&path);
        book.add_word("deux", "deux mots", 2_000, "a.srt").unwrap();
    }

    let book = VocabularyBook::load(&path);
    let words: Vec<&str> = book.entries().iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, ["un", "deux"]);
    assert_eq!(book.stats().total_saves, 2);
}

#[test]
fn csv_export_writes_all_entries() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = VocabularyBook::load(dir.path().join("vocabulary.json"));
    book.add_word("hola", "hola mundo", 0, "b.srt").unwrap();
    book.add_word("mundo", "hola mundo", 0, "b.srt").unwrap();

    let out = dir.path().join("export.csv");
    book.export_csv(&out).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3); // header + 2 entries
    assert!(lines[1].contains("\"hola\""));
    assert!(lines[2].contains("\"mundo\""));
}
