use assert_fs::prelude::*;
use std::path::PathBuf;
use vidman::app::settings::Settings;
use vidman::app::{App, Mode};
use vidman::{Record, Store};

fn media_root() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("series/pilot.mkv").write_str("x").unwrap();
    temp.child("film.mp4").write_str("x").unwrap();
    temp
}

fn app_with(temp: &assert_fs::TempDir, store: Store) -> App {
    let settings = Settings {
        browse_dir: temp.path().to_path_buf(),
        // No real player in tests.
        player: Vec::new(),
        ..Settings::default()
    };
    let mut app = App::new(store, settings).unwrap();
    app.sync_dimensions(80, 24);
    app
}

#[test]
fn browse_pick_appends_a_sorted_persisted_record() {
    let temp = media_root();
    let catalog = temp.path().join("catalog.json");
    let mut app = app_with(&temp, Store::load(&catalog).unwrap());
    app.append_record(Record::new("2015", "Old")).unwrap();

    // Descend into series/ and pick the file there, the way the browse
    // handler does it.
    app.browser.descend().unwrap();
    let picked = app.browser.selected_path().unwrap();
    assert_eq!(picked, temp.path().join("series").join("pilot.mkv"));
    app.append_record(Record::new("2024", "Pilot").with_path(picked))
        .unwrap();

    let reloaded = Store::load(&catalog).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get(0).unwrap().title, "Old");
    assert_eq!(reloaded.get(1).unwrap().title, "Pilot");
    assert!(reloaded.get(1).unwrap().path.is_some());
}

#[test]
fn play_marks_the_entry_seen_and_persists_the_flag() {
    let temp = media_root();
    let catalog = temp.path().join("catalog.json");
    let mut app = app_with(&temp, Store::load(&catalog).unwrap());
    app.append_record(
        Record::new("2024", "Pilot").with_path(PathBuf::from("/nowhere/pilot.mkv")),
    )
    .unwrap();

    app.play_selected().unwrap();
    let reloaded = Store::load(&catalog).unwrap();
    assert!(reloaded.get(0).unwrap().seen);
}

#[test]
fn delete_with_file_removes_the_backing_file_too() {
    let temp = media_root();
    let catalog = temp.path().join("catalog.json");
    let target = temp.path().join("film.mp4");
    let mut app = app_with(&temp, Store::load(&catalog).unwrap());
    app.append_record(Record::new("2024", "Film").with_path(target.clone()))
        .unwrap();

    app.delete_selected(true).unwrap();
    assert!(app.store.is_empty());
    assert!(!target.exists());
    let reloaded = Store::load(&catalog).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn mode_scopes_unwind_like_the_real_handlers_nest() {
    let temp = media_root();
    let mut app = app_with(&temp, Store::in_memory(Vec::new()));
    // browse -> prompt(year) -> prompt(title) mirrors the add-entry flow.
    app.with_mode(Mode::Browse, |app| {
        app.with_mode(Mode::Prompt, |app| {
            assert_eq!(app.modes.current(), Mode::Prompt);
        });
        app.with_mode(Mode::Prompt, |app| {
            assert_eq!(app.modes.current(), Mode::Prompt);
        });
        assert_eq!(app.modes.current(), Mode::Browse);
    });
    assert_eq!(app.modes.current(), Mode::Main);
}
