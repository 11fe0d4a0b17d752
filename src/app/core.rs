use std::fs;
use std::io;

use tracing::{debug, warn};

use crate::app::modes::{Mode, ModeController};
use crate::app::settings::Settings;
use crate::browser::Browser;
use crate::player;
use crate::store::{Record, Store, StoreError};
use crate::viewport::Viewport;

/// Top-level application state: the catalog store with its viewport, the
/// directory browser, the mode controller and the loaded settings. Handlers
/// receive this by mutable reference; no component reaches for globals.
pub struct App {
    pub store: Store,
    pub library: Viewport,
    pub browser: Browser,
    pub modes: ModeController,
    pub settings: Settings,
}

impl App {
    pub fn new(store: Store, settings: Settings) -> io::Result<Self> {
        let browser = Browser::new(
            settings.browse_dir.clone(),
            settings.extensions.clone(),
            1,
            0,
        )?;
        Ok(App {
            store,
            library: Viewport::new(1, 0),
            browser,
            modes: ModeController::default(),
            settings,
        })
    }

    /// Run `f` with `mode` active, restoring the previous mode when the
    /// scope ends. Restoration also covers early returns from inside `f`
    /// (including `?`), so a mode can never leak past the operation that
    /// activated it.
    pub fn with_mode<R>(&mut self, mode: Mode, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = self.modes.enter(mode);
        let result = f(self);
        self.modes.restore(previous);
        result
    }

    /// Propagate new terminal geometry to every viewport. The library list
    /// sits between a one-line header and a four-line footer; the browser
    /// list only gives up the header line.
    pub fn sync_dimensions(&mut self, width: u16, height: u16) {
        let width = width as usize;
        let height = height as usize;
        self.library
            .resize(height.saturating_sub(5).max(1), width, self.store.len());
        let len = self.browser.len();
        self.browser
            .view
            .resize(height.saturating_sub(1).max(1), width, len);
    }

    /// The record under the library cursor, if any.
    pub fn selected_record(&self) -> Option<&Record> {
        self.store.get(self.library.select())
    }

    /// Mark the selected entry seen and hand its path to the configured
    /// player. The launch is fire-and-forget; failures only make the log.
    /// Entries without a stored path just get the seen mark.
    pub fn play_selected(&mut self) -> Result<(), StoreError> {
        let index = self.library.select();
        let Some(record) = self.store.get(index) else {
            return Ok(());
        };
        let path = record.path.clone();
        self.store.set_seen(index, true)?;
        match path {
            Some(path) => {
                if let Err(err) = player::launch(&self.settings.player, &path) {
                    warn!("player launch failed for {}: {err}", path.display());
                }
            }
            None => debug!("entry {index} has no path, nothing to play"),
        }
        Ok(())
    }

    pub fn toggle_selected_seen(&mut self) -> Result<(), StoreError> {
        self.store.toggle_seen(self.library.select())
    }

    /// Remove the selected record (guarding the index on behalf of the
    /// store), optionally deleting the file it points at. File removal is
    /// best-effort and never blocks the catalog mutation.
    pub fn delete_selected(&mut self, remove_file: bool) -> Result<(), StoreError> {
        let index = self.library.select();
        if index >= self.store.len() {
            return Ok(());
        }
        if remove_file {
            if let Some(path) = self.store.get(index).and_then(|r| r.path.clone()) {
                if let Err(err) = fs::remove_file(&path) {
                    warn!("could not remove {}: {err}", path.display());
                }
            }
        }
        self.store.delete(index)?;
        self.library.clamp(self.store.len());
        Ok(())
    }

    /// Append a record picked in the browser and re-clamp the library view
    /// against the grown catalog.
    pub fn append_record(&mut self, record: Record) -> Result<(), StoreError> {
        self.store.append(record)?;
        self.library.clamp(self.store.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SortField;
    use assert_fs::prelude::*;

    fn test_app() -> (assert_fs::TempDir, App) {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.mkv").write_str("x").unwrap();
        let settings = Settings {
            browse_dir: temp.path().to_path_buf(),
            ..Settings::default()
        };
        let store = Store::in_memory(vec![
            Record::new("2019", "A"),
            Record::new("2020", "B"),
            Record::new("2018", "C"),
        ]);
        let app = App::new(store, settings).unwrap();
        (temp, app)
    }

    #[test]
    fn with_mode_restores_across_three_levels_of_nesting() {
        let (_temp, mut app) = test_app();
        assert_eq!(app.modes.current(), Mode::Main);
        app.with_mode(Mode::Browse, |app| {
            assert_eq!(app.modes.current(), Mode::Browse);
            app.with_mode(Mode::Prompt, |app| {
                assert_eq!(app.modes.current(), Mode::Prompt);
                app.with_mode(Mode::Help, |app| {
                    assert_eq!(app.modes.current(), Mode::Help);
                });
                assert_eq!(app.modes.current(), Mode::Prompt);
            });
            assert_eq!(app.modes.current(), Mode::Browse);
        });
        assert_eq!(app.modes.current(), Mode::Main);
    }

    #[test]
    fn with_mode_restores_on_early_exit() {
        let (_temp, mut app) = test_app();
        fn inner(app: &mut App) -> Result<(), StoreError> {
            app.with_mode(Mode::Sort, |app| {
                app.with_mode(Mode::Delete, |app| {
                    // Bail out from two scopes deep.
                    app.store.delete(42)?;
                    unreachable!("delete of an absent index must fail");
                })
            })
        }
        assert!(inner(&mut app).is_err());
        assert_eq!(app.modes.current(), Mode::Main);
    }

    #[test]
    fn sync_dimensions_reserves_header_and_footer() {
        let (_temp, mut app) = test_app();
        app.sync_dimensions(80, 24);
        assert_eq!(app.library.height(), 19);
        assert_eq!(app.browser.view.height(), 23);
        // Degenerate geometry still leaves a one-row window.
        app.sync_dimensions(80, 2);
        assert_eq!(app.library.height(), 1);
    }

    #[test]
    fn delete_selected_guards_the_store() {
        let (_temp, mut app) = test_app();
        app.library.jump_bottom(app.store.len());
        app.delete_selected(false).unwrap();
        assert_eq!(app.store.len(), 2);
        // Selection re-clamped onto the new last row.
        assert!(app.library.select() < app.store.len());
        app.delete_selected(false).unwrap();
        app.delete_selected(false).unwrap();
        // Empty store: a further delete is a guarded no-op.
        app.delete_selected(false).unwrap();
        assert!(app.store.is_empty());
    }

    #[test]
    fn append_record_keeps_selection_valid() {
        let (_temp, mut app) = test_app();
        app.sync_dimensions(80, 24);
        app.append_record(Record::new("2017", "Z")).unwrap();
        assert_eq!(app.store.len(), 4);
        assert_eq!(app.store.sort_field(), SortField::Year);
        assert!(app.library.select() < app.store.len());
    }

    #[test]
    fn play_selected_marks_seen_without_a_path() {
        let (_temp, mut app) = test_app();
        // Sorted by year: C(2018) first.
        app.play_selected().unwrap();
        assert!(app.store.records().iter().any(|r| r.seen && r.title == "C"));
    }
}
