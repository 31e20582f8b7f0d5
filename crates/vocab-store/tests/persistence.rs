use std::fs;

use vocab_store::{
    SEED_STOPWORDS, load_content_words, load_stopwords, load_token_sequence, load_word_set,
    read_corpus_dir, save_content_words, save_stopwords, save_token_sequence, save_word_set,
    write_word_list,
};
use vocab_types::{ContentWordEntry, ContentWords, StopwordSet};

#[test]
fn missing_stopword_file_falls_back_to_seed_list() {
    let dir = tempfile::tempdir().unwrap();
    let stops = load_stopwords(dir.path().join("stop_word_list.txt")).unwrap();
    assert_eq!(stops.len(), SEED_STOPWORDS.len());
    assert!(stops.contains("atque"));
}

#[test]
fn empty_stopword_file_also_falls_back_to_seed_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stop_word_list.txt");
    fs::write(&path, "\n\n").unwrap();
    let stops = load_stopwords(&path).unwrap();
    assert!(stops.contains("quoque"));
}

#[test]
fn word_sets_are_deduplicated_sorted_and_without_blanks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    save_word_set(["sed", "", "et", "sed", "  "], &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "et\nsed\n");

    let loaded = load_word_set(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(load_word_set(dir.path().join("absent.txt")).unwrap().is_empty());
}

#[test]
fn saved_stopwords_replace_the_seed_on_next_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("stop_word_list.txt");
    let stops: StopwordSet = ["et", "in", "inquit"].into_iter().collect();
    save_stopwords(&stops, &path).unwrap();

    let reloaded = load_stopwords(&path).unwrap();
    assert_eq!(reloaded, stops);
}

#[test]
fn content_word_dictionary_survives_a_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content_words.txt");
    let mut words = ContentWords::new();
    words.insert(
        "puella",
        ContentWordEntry {
            count: 14,
            forms: ["puella", "puellae", "Puella"].into_iter().map(String::from).collect(),
        },
    );
    words.insert(
        "rosa",
        ContentWordEntry {
            count: 2,
            forms: ["rosam"].into_iter().map(String::from).collect(),
        },
    );
    save_content_words(&words, &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "puella,14,Puella puella puellae\nrosa,2,rosam\n"
    );
    assert_eq!(load_content_words(&path).unwrap(), words);
}

#[test]
fn malformed_content_word_line_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content_words.txt");
    fs::write(&path, "puella,3,puella\nrosa,lots,rosa\n").unwrap();
    let err = load_content_words(&path).unwrap_err();
    assert!(format!("{err:#}").contains(":2 malformed"));
}

#[test]
fn missing_content_word_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let words = load_content_words(dir.path().join("content_words.txt")).unwrap();
    assert!(words.is_empty());
}

#[test]
fn token_sequences_keep_order_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reduced_corpus.txt");
    let tokens: Vec<String> = ["puella", "rosam", "puella", ""]
        .into_iter()
        .map(String::from)
        .collect();
    save_token_sequence(&tokens, &path).unwrap();
    assert_eq!(
        load_token_sequence(&path).unwrap(),
        vec!["puella", "rosam", "puella"]
    );
    assert!(load_token_sequence(dir.path().join("absent.txt")).is_err());
}

#[test]
fn entity_list_is_written_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("NE-in-corpus.txt");
    let names: Vec<String> = ["Roma", "Caesar", "Roma"].into_iter().map(String::from).collect();
    write_word_list(&names, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Roma\nCaesar\nRoma\n");
}

#[test]
fn corpus_directory_is_concatenated_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "rosa rosam").unwrap();
    fs::write(dir.path().join("a.txt"), "puella").unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();

    let corpus = read_corpus_dir(dir.path()).unwrap();
    assert_eq!(corpus, " puella rosa rosam");
    assert!(read_corpus_dir(dir.path().join("absent")).is_err());
}
