use std::fs;
use std::io::Cursor;
use wordbook_core::{
    default_collection, load_collection, run, save_collection, CollectionRepository, Dictionary,
    DictionaryService, ExitOutcome, JsonFileCollectionRepository, RepoError, SessionEnd,
    StoreError,
};

fn run_session(
    repo: &JsonFileCollectionRepository,
    args: &[&str],
    script: &str,
) -> (ExitOutcome, String) {
    let mut output = Vec::new();
    let outcome = run(args, repo, Cursor::new(script.to_string()), &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn save_then_load_preserves_every_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.json");

    let mut collection = default_collection();
    let mut es = Dictionary::new("Spanish", "Russian");
    es.add_word("puente", "мост");
    collection.add_dictionary("es-ru", es);
    save_collection(&collection, &path).unwrap();

    let loaded = load_collection(&path).unwrap();
    assert_eq!(
        loaded.keys().collect::<Vec<_>>(),
        collection.keys().collect::<Vec<_>>()
    );
    for (key, dict) in collection.iter() {
        let other = loaded.get_dictionary(key).unwrap();
        assert_eq!(other.from, dict.from);
        assert_eq!(other.to, dict.to);
        assert_eq!(other.words, dict.words);
    }
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.json");
    fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

    let repo = JsonFileCollectionRepository::new(&path);
    repo.save(&default_collection()).unwrap();
    assert_eq!(repo.load().unwrap(), default_collection());
}

#[test]
fn corrupted_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.json");
    fs::write(&path, "not json at all").unwrap();

    let service = DictionaryService::new(JsonFileCollectionRepository::new(&path));
    let outcome = service.load_or_seed();
    assert!(matches!(
        outcome.recovered_from,
        Some(RepoError::Store(StoreError::Decode(_)))
    ));
    assert_eq!(outcome.collection, default_collection());
}

#[test]
fn write_then_find_scenario_persists_new_pair() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.json");
    let repo = JsonFileCollectionRepository::new(&path);

    let script = "bridge\nмост\nexit\ny\nfind\nbridge\nexit\nq\n";
    let (outcome, output) = run_session(&repo, &["en-ru", "-write"], script);

    assert_eq!(outcome, ExitOutcome::Completed(SessionEnd::Quit));
    assert!(output.contains("Added: bridge = мост\n"));
    assert!(output.contains("Translation: bridge = мост\n"));

    let persisted: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(persisted["dicts"]["en-ru"]["words"]["bridge"], "мост");
    assert_eq!(persisted["dicts"]["en-ru"]["words"]["hello"], "привет");
}

#[test]
fn second_run_reads_what_the_first_run_saved() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileCollectionRepository::new(dir.path().join("dictionaries.json"));

    let (_, first) = run_session(&repo, &["de-ru", "-write"], "haus\nдом\n");
    assert!(first
        .starts_with("Failed to load dictionaries, creating new ones: failed to open file: "));
    assert!(first.ends_with("Dictionaries saved successfully\n"));

    let (outcome, second) = run_session(&repo, &["de-ru", "-find"], "haus\nexit\nq\n");
    assert_eq!(outcome, ExitOutcome::Completed(SessionEnd::Quit));
    assert!(!second.contains("Failed to load"));
    assert!(second.contains("Translation: haus = дом\n"));
}

#[test]
fn corrupted_file_scenario_uses_seed_and_quit_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.json");
    fs::write(&path, "{\"dicts\": [").unwrap();
    let repo = JsonFileCollectionRepository::new(&path);

    let (outcome, output) = run_session(&repo, &["fr-ru", "-find"], "bonjour\nexit\nq\n");

    assert_eq!(outcome, ExitOutcome::Completed(SessionEnd::Quit));
    assert!(output
        .starts_with("Failed to load dictionaries, creating new ones: failed to decode JSON: "));
    assert!(output.contains("Translation: bonjour = привет\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"dicts\": [");
}

#[test]
fn unknown_dictionary_on_first_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionaries.json");
    let repo = JsonFileCollectionRepository::new(&path);

    let (outcome, output) = run_session(&repo, &["xx-yy", "-find"], "");

    assert_eq!(outcome, ExitOutcome::DictionaryNotFound);
    assert!(output.contains("Dictionary 'xx-yy' not found\n"));
    assert!(output.contains("  en-ru (English->Russian)\n"));
    assert!(output.contains("  de-ru (German->Russian)\n"));
    assert!(output.contains("  fr-ru (French->Russian)\n"));
    assert!(!path.exists());
}

#[test]
fn save_failure_is_reported_and_session_continues() {
    let dir = tempfile::tempdir().unwrap();
    let repo =
        JsonFileCollectionRepository::new(dir.path().join("missing").join("dictionaries.json"));

    let (outcome, output) = run_session(
        &repo,
        &["en-ru", "-write"],
        "sun\nсолнце\nexit\ny\nexit\n",
    );

    assert_eq!(outcome, ExitOutcome::Completed(SessionEnd::Exit));
    assert!(output.contains("Failed to save dictionaries: failed to create file: "));
    assert!(output.contains("Switch mode? (find/write/exit): "));
}
