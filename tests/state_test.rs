//! Integration tests covering the snippet lifecycle, icon changes and
//! relocation without touching the real home directory.

use floatball::store::{load_snippets, persist, SNIPPET_FILE_NAME};
use floatball::{ApplicationState, FloatballError, SelectionPopup, UserAction};
use std::fs;
use tempfile::TempDir;

fn fresh_state() -> (ApplicationState, TempDir) {
    let home = TempDir::new().expect("temp dir");
    let state = ApplicationState::load(home.path());
    (state, home)
}

#[test]
fn add_add_add_delete_scenario() {
    let (mut state, home) = fresh_state();

    assert!(state.capture("hello").is_ok());
    assert_eq!(state.items(), ["hello"]);

    assert!(matches!(
        state.capture("hello"),
        Err(FloatballError::DuplicateSnippet)
    ));
    assert_eq!(state.items(), ["hello"]);

    assert!(state.capture("world").is_ok());
    assert_eq!(state.items(), ["hello", "world"]);

    assert_eq!(state.delete(0).expect("delete"), "hello");
    assert_eq!(state.items(), ["world"]);
    assert!(!state.store().contains("hello"));

    let on_disk = load_snippets(&home.path().join(SNIPPET_FILE_NAME)).expect("load");
    assert_eq!(on_disk, ["world"]);
}

#[test]
fn snippets_survive_restart() {
    let (mut state, home) = fresh_state();
    state.capture("第一条").unwrap();
    state.capture("second snippet with more than twenty characters").unwrap();
    drop(state);

    let reloaded = ApplicationState::load(home.path());
    assert_eq!(
        reloaded.items(),
        ["第一条", "second snippet with more than twenty characters"]
    );
}

#[test]
fn delete_out_of_range_is_index_error() {
    let (mut state, _home) = fresh_state();
    state.capture("only").unwrap();

    assert!(matches!(
        state.delete(1),
        Err(FloatballError::IndexOutOfRange { position: 1, len: 1 })
    ));
    assert_eq!(state.items(), ["only"]);
}

#[test]
fn popup_select_and_delete_flow() {
    let (mut state, _home) = fresh_state();
    state.capture("alpha").unwrap();
    state.capture("beta").unwrap();
    state.capture("a long snippet that needs a tooltip").unwrap();

    let action = SelectionPopup::open(state.items())
        .resolve(Some(2), floatball::PointerButton::Primary)
        .unwrap();
    assert_eq!(action, UserAction::Select(2));
    assert_eq!(
        state.select(2).unwrap(),
        "a long snippet that needs a tooltip"
    );

    let action = SelectionPopup::open(state.items())
        .resolve(Some(0), floatball::PointerButton::Secondary)
        .unwrap();
    assert_eq!(action, UserAction::Delete(0));
    state.delete(0).unwrap();

    // Popup stays open over the shortened list
    let labels: Vec<String> = SelectionPopup::open(state.items())
        .entries()
        .map(|entry| entry.display())
        .collect();
    assert_eq!(labels, ["beta", "a long snippet that ..."]);
}

#[test]
fn symbol_change_persists() {
    let (mut state, home) = fresh_state();
    state.set_symbol("🚀").expect("valid symbol");
    assert_eq!(state.symbol(), "🚀");

    let reloaded = ApplicationState::load(home.path());
    assert_eq!(reloaded.symbol(), "🚀");
}

#[test]
fn save_directory_relocation() {
    let (mut state, home) = fresh_state();
    let target = TempDir::new().unwrap();
    state.capture("moved along").unwrap();

    let candidate = target.path().to_string_lossy().to_string();
    state.set_save_directory(&candidate).expect("existing dir");
    state.capture("written after move").unwrap();

    assert_eq!(state.save_directory(), target.path());
    assert_eq!(
        load_snippets(&target.path().join(SNIPPET_FILE_NAME)).unwrap(),
        ["moved along", "written after move"]
    );
    // Config stays in the fixed home and points at the new directory
    assert!(home.path().join("config.json").exists());
    let reloaded = ApplicationState::load(home.path());
    assert_eq!(reloaded.save_directory(), target.path());
    assert_eq!(reloaded.items(), ["moved along", "written after move"]);
}

#[test]
fn invalid_directory_rejected_without_mutation() {
    let (mut state, home) = fresh_state();
    let file = home.path().join("not-a-dir.txt");
    fs::write(&file, "x").unwrap();

    for candidate in ["", "/definitely/not/here", file.to_str().unwrap()] {
        assert!(matches!(
            state.set_save_directory(candidate),
            Err(FloatballError::InvalidDirectory(_))
        ));
    }
    assert_eq!(state.save_directory(), home.path());
    assert!(!home.path().join("config.json").exists());
}

#[test]
fn corrupt_snippet_file_is_preserved_and_reset() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(SNIPPET_FILE_NAME);
    fs::write(&path, "[\"unterminated").unwrap();

    let mut state = ApplicationState::load(home.path());
    assert!(state.items().is_empty());

    let notices = state.take_startup_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("options.json"));
    assert!(state.take_startup_notices().is_empty());

    let backup = home.path().join("options.json.corrupt");
    assert_eq!(fs::read_to_string(&backup).unwrap(), "[\"unterminated");

    // The next write replaces the broken file, the backup stays
    state.capture("fresh").unwrap();
    assert_eq!(load_snippets(&path).unwrap(), ["fresh"]);
    assert!(backup.exists());
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.json"), "not json").unwrap();

    let mut state = ApplicationState::load(home.path());
    assert_eq!(state.symbol(), "💎");
    assert_eq!(state.save_directory(), home.path());
    assert_eq!(state.take_startup_notices().len(), 1);
    assert!(home.path().join("config.json.corrupt").exists());
}

#[test]
fn hand_edited_duplicates_are_collapsed_on_load() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(SNIPPET_FILE_NAME);
    persist::save_snippets(&path, &["a".to_string(), "b".to_string(), "a".to_string()]).unwrap();

    let mut state = ApplicationState::load(home.path());
    assert_eq!(state.items(), ["a", "b"]);
    assert!(matches!(
        state.capture("a"),
        Err(FloatballError::DuplicateSnippet)
    ));
}

#[test]
fn invalid_utf8_snippet_file_is_backed_up_before_any_write() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(SNIPPET_FILE_NAME);
    let original: &[u8] = b"[\"keep me\", \"bad \xff\"]";
    fs::write(&path, original).unwrap();

    let mut state = ApplicationState::load(home.path());
    let notices = state.take_startup_notices();
    assert_eq!(notices, ["options.json was unreadable, started fresh"]);

    let backup = home.path().join("options.json.corrupt");
    assert_eq!(fs::read(&backup).unwrap(), original);

    state.capture("new").unwrap();
    assert_eq!(load_snippets(&path).unwrap(), ["new"]);
    assert_eq!(fs::read(&backup).unwrap(), original);
}

#[test]
fn unreadable_snippet_file_is_never_overwritten() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(SNIPPET_FILE_NAME);
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let mut state = ApplicationState::load(home.path());
    assert!(state.store().is_locked());
    assert_eq!(
        state.take_startup_notices(),
        ["Could not read options.json"]
    );

    assert!(matches!(
        state.capture("new"),
        Err(FloatballError::StoreLocked(_))
    ));
    assert!(state.items().is_empty());
    assert!(path.join("keep").exists());

    // Moving to a readable directory unlocks the store
    let target = TempDir::new().unwrap();
    let candidate = target.path().to_string_lossy().to_string();
    state.set_save_directory(&candidate).unwrap();
    state.capture("new").unwrap();
    assert_eq!(
        load_snippets(&target.path().join(SNIPPET_FILE_NAME)).unwrap(),
        ["new"]
    );
}

#[test]
fn failed_config_write_keeps_old_directory() {
    let (mut state, home) = fresh_state();
    state.capture("stay").unwrap();
    let config_path = home.path().join("config.json");
    fs::create_dir(&config_path).unwrap();
    fs::write(config_path.join("blocker"), "x").unwrap();

    let target = TempDir::new().unwrap();
    let candidate = target.path().to_string_lossy().to_string();
    assert!(state.set_save_directory(&candidate).is_err());

    assert_eq!(state.save_directory(), home.path());
    assert_eq!(state.store().path(), home.path().join(SNIPPET_FILE_NAME));
    assert!(!target.path().join(SNIPPET_FILE_NAME).exists());
}

#[test]
fn failed_relocation_restores_config_on_disk() {
    let (mut state, home) = fresh_state();
    state.capture("stay").unwrap();

    let target = TempDir::new().unwrap();
    let blocked = target.path().join(SNIPPET_FILE_NAME);
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("blocker"), "x").unwrap();

    let candidate = target.path().to_string_lossy().to_string();
    assert!(state.set_save_directory(&candidate).is_err());
    assert_eq!(state.save_directory(), home.path());

    let reloaded = ApplicationState::load(home.path());
    assert_eq!(reloaded.save_directory(), home.path());
    assert_eq!(reloaded.items(), ["stay"]);
}
