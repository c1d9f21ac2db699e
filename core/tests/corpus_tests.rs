use concord_core::{Corpus, Error, FsStorage, MemoryStorage, MAX_DOCUMENTS};

#[test]
fn eleventh_document_is_rejected() {
    let mut corpus = Corpus::new();
    for i in 0..MAX_DOCUMENTS {
        corpus.add(format!("doc{i}.txt"), format!("word{i} shared")).unwrap();
    }
    let err = corpus.add("extra.txt", "more").unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { limit: 10 }));
    assert_eq!(corpus.len(), 10);
    assert!(!corpus.contains("extra.txt"));
    assert_eq!(corpus.documents()[9].name(), "doc9.txt");
}

#[test]
fn open_applies_collaborator_checks_in_order() {
    let mut storage = MemoryStorage::new();
    storage.insert("a.txt", "alpha beta");
    storage.insert("notes.md", "gamma");
    let mut corpus = Corpus::new();

    assert!(matches!(corpus.open(&storage, "notes.md"), Err(Error::NotTextFile(_))));
    assert!(matches!(corpus.open(&storage, "missing.TXT"), Err(Error::SourceUnavailable { .. })));
    corpus.open(&storage, "a.txt").unwrap();
    assert!(matches!(corpus.open(&storage, "a.txt"), Err(Error::DuplicateDocument(_))));
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.documents()[0].count("beta"), 1);
}

#[test]
fn vocabulary_counts_sum_to_document_length() {
    let mut corpus = Corpus::new();
    corpus.add("a.txt", "It was the best of times, it was the worst of times.").unwrap();
    corpus.add("b.txt", "").unwrap();
    for doc in corpus.documents() {
        let total: usize = doc.vocabulary().map(|(word, _)| doc.count(word.as_str())).sum();
        assert_eq!(total, doc.tokens().len());
    }
}

#[test]
fn summaries_follow_corpus_order() {
    let mut corpus = Corpus::new();
    corpus.add("b.txt", "one one").unwrap();
    corpus.add("a.txt", "two three-four").unwrap();
    let rows: Vec<(String, usize, usize)> = corpus
        .summaries()
        .into_iter()
        .map(|s| (s.name, s.total_words, s.distinct_words))
        .collect();
    assert_eq!(rows, vec![("b.txt".into(), 2, 1), ("a.txt".into(), 2, 2)]);
}

#[test]
fn unreadable_file_is_not_added() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("good.txt"), "fine words").unwrap();
    std::fs::write(dir.path().join("binary.txt"), [0xffu8, 0xfe, 0x00, 0x80]).unwrap();
    let storage = FsStorage::with_root(dir.path());
    let mut corpus = Corpus::new();
    corpus.open(&storage, "good.txt").unwrap();

    let err = corpus.open(&storage, "binary.txt").unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { ref name, .. } if name == "binary.txt"));
    assert_eq!(corpus.len(), 1);
    assert!(!corpus.contains("binary.txt"));
    assert_eq!(corpus.documents()[0].name(), "good.txt");
}
