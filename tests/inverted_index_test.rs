use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use tempfile::tempdir;
use vortex::index::{IndexConfig, InvertedIndex, Posting, QueryNormalization};
use vortex::storage::{MemoryInput, MemoryOutput};

const THREADS: i32 = 8;
const WORDS_PER_THREAD: i32 = 50;

fn word(thread: i32, n: i32) -> String {
    format!("t{thread}w{n}")
}

#[test]
fn test_concurrent_insertion_loses_nothing() {
    let index = Arc::new(InvertedIndex::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                // word n appears n + 1 times, vocabularies are disjoint per thread
                let mut text = String::new();
                for n in 0..WORDS_PER_THREAD {
                    for _ in 0..=n {
                        text.push_str(&word(t, n));
                        text.push(' ');
                    }
                }
                index.add_document(t, &text);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(index.term_count(), (THREADS * WORDS_PER_THREAD) as usize);
    for t in 0..THREADS {
        for n in 0..WORDS_PER_THREAD {
            assert_eq!(index.search(&word(t, n)), vec![Posting::new(t, n + 1)]);
        }
    }
}

#[test]
fn test_concurrent_shared_term_keeps_one_posting_per_document() {
    let index = Arc::new(InvertedIndex::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for doc in 0..10 {
                    let file_id = t * 10 + doc;
                    index.add_document(file_id, "shared Shared SHARED!");
                    // interleave reads with writes
                    assert!(!index.search("shared").is_empty());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let postings = index.search("shared");
    assert_eq!(postings.len(), (THREADS * 10) as usize);
    assert!(postings.iter().all(|p| p.frequency == 3));

    let ids: HashSet<i32> = postings.iter().map(|p| p.doc_id).collect();
    assert_eq!(ids, (0..THREADS * 10).collect());
}

#[test]
fn test_save_load_round_trip_preserves_every_term() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round_trip.index");

    let docs = [
        "This is the first document about search engines",
        "Python is great for glue code but C++ is fast",
        "Search engines use inverted indexes for speed",
        "Vortex combines C++ and Python",
    ];

    let index = InvertedIndex::new();
    for (id, doc) in docs.iter().enumerate() {
        index.add_document(id as i32, doc);
    }
    index.add_document(1, "python python");
    index.save(&path);
    assert!(path.exists());

    let loaded = InvertedIndex::new();
    loaded.load(&path);

    assert_eq!(loaded.stats(), index.stats());

    let mut vocabulary: HashSet<String> = HashSet::new();
    for doc in docs {
        for raw in doc.split_whitespace() {
            let term: String = raw
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect::<String>()
                .to_ascii_lowercase();
            if !term.is_empty() {
                vocabulary.insert(term);
            }
        }
    }
    for term in &vocabulary {
        assert_eq!(loaded.search(term), index.search(term), "term {term}");
    }

    assert_eq!(
        loaded.search("python"),
        vec![Posting::new(1, 1), Posting::new(3, 1), Posting::new(1, 2)]
    );
    assert_eq!(loaded.search("c"), vec![Posting::new(1, 1), Posting::new(3, 1)]);
}

#[test]
fn test_load_replaces_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("replace.index");

    let source = InvertedIndex::new();
    source.add_document(1, "fresh");
    source.save(&path);

    let target = InvertedIndex::new();
    target.add_document(9, "stale fresh");
    target.load(&path);

    assert!(target.search("stale").is_empty());
    assert_eq!(target.search("fresh"), vec![Posting::new(1, 1)]);
}

#[test]
fn test_load_nonexistent_path_leaves_store_empty() {
    let dir = tempdir().unwrap();
    let index = InvertedIndex::new();
    index.add_document(1, "something");

    index.load(dir.path().join("does-not-exist.index"));

    assert!(index.is_empty());
    assert!(index.search("something").is_empty());
    assert!(index.try_load(dir.path().join("does-not-exist.index")).is_err());
}

#[test]
fn test_load_truncated_file_is_reported_not_trusted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("truncated.index");

    let source = InvertedIndex::new();
    source.add_document(1, "alpha beta gamma");
    source.save(&path);

    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let index = InvertedIndex::new();
    let err = index.try_load(&path).unwrap_err();
    assert!(err.is_corruption());
    assert!(index.is_empty());
}

#[test]
fn test_single_term_file_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bytes.index");

    let index = InvertedIndex::new();
    index.add_document(1, "Cat cat CAT");
    index.add_document(2, "cat");
    index.save(&path);

    let mut expected = Vec::new();
    expected.extend_from_slice(&1u64.to_le_bytes());
    expected.extend_from_slice(&3u64.to_le_bytes());
    expected.extend_from_slice(b"cat");
    expected.extend_from_slice(&2u64.to_le_bytes());
    expected.extend_from_slice(&1i32.to_le_bytes());
    expected.extend_from_slice(&3i32.to_le_bytes());
    expected.extend_from_slice(&2i32.to_le_bytes());
    expected.extend_from_slice(&1i32.to_le_bytes());

    assert_eq!(std::fs::read(&path).unwrap(), expected);
}

#[test]
fn test_in_memory_round_trip_with_full_query_normalization() {
    let config = IndexConfig {
        query_normalization: QueryNormalization::Full,
        ..IndexConfig::default()
    };

    let source = InvertedIndex::new();
    source.add_document(4, "Don't panic.");
    let output = source.write_to(MemoryOutput::new()).unwrap();

    let index = InvertedIndex::with_config(config);
    index.read_from(MemoryInput::new(output.into_inner())).unwrap();

    assert_eq!(index.search("DON'T"), vec![Posting::new(4, 1)]);
    assert_eq!(index.search("panic."), vec![Posting::new(4, 1)]);
    assert!(source.search("panic.").is_empty());
}
