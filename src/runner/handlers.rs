//! Per-mode key handlers. Each command that opens its own mode runs a
//! sub-loop owning the terminal until that mode exits.

pub mod browse;
pub mod delete;
pub mod help;
pub mod prompt;
pub mod sort;

use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyEvent;
use crate::runner::terminal::Term;

/// Main-mode dispatch. The library viewport's built-in navigation table gets
/// first refusal; unmatched keys fall through to the command table, and keys
/// in neither are silently ignored. Returns `Ok(true)` to quit.
pub fn handle_key(terminal: &mut Term, app: &mut App, key: &KeyEvent) -> anyhow::Result<bool> {
    let len = app.store.len();
    if app.library.handle_key(key, len) {
        return Ok(false);
    }
    if keybinds::is_quit(key) {
        return Ok(true);
    }
    if keybinds::is_select(key) || keybinds::is_char(key, 'l') {
        app.play_selected()?;
    } else if keybinds::is_char(key, '!') {
        app.toggle_selected_seen()?;
    } else if keybinds::is_char(key, 'a') {
        browse::run(terminal, app)?;
    } else if keybinds::is_char(key, 'd') {
        delete::run(terminal, app)?;
    } else if keybinds::is_char(key, 'z') {
        sort::run(terminal, app)?;
    } else if keybinds::is_char(key, '?') {
        help::run(terminal, app)?;
    }
    Ok(false)
}
