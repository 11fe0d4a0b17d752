use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::{read_event, InputEvent};
use crate::runner::handlers::prompt;
use crate::runner::terminal::Term;
use crate::store::Record;
use crate::ui;

/// Browse sub-loop: drives the directory navigator until the user picks a
/// path (appending a catalog record) or backs out with `q`.
pub fn run(terminal: &mut Term, app: &mut App) -> anyhow::Result<()> {
    // Refetch on entry so filesystem changes since the last visit show up.
    app.browser.refetch()?;
    app.with_mode(Mode::Browse, |app| browse_loop(terminal, app))
}

fn browse_loop(terminal: &mut Term, app: &mut App) -> anyhow::Result<()> {
    loop {
        let size = terminal.size()?;
        app.sync_dimensions(size.width, size.height);
        terminal.draw(|f| ui::ui(f, app))?;

        let InputEvent::Key(key) = read_event()? else {
            continue;
        };
        let len = app.browser.len();
        if app.browser.view.handle_key(&key, len) {
            continue;
        }
        if keybinds::is_quit(&key) {
            return Ok(());
        }
        if keybinds::is_descend(&key) {
            app.browser.descend()?;
        } else if keybinds::is_ascend(&key) {
            app.browser.ascend()?;
        } else if keybinds::is_select(&key) {
            if let Some(path) = app.browser.selected_path() {
                let Some(year) = prompt::read_line(terminal, app, "Year?")? else {
                    continue;
                };
                let Some(title) = prompt::read_line(terminal, app, "Title?")? else {
                    continue;
                };
                app.append_record(Record::new(year, title).with_path(path))?;
                return Ok(());
            }
        }
    }
}
