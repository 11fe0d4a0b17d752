use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::{read_event, InputEvent};
use crate::runner::terminal::Term;
use crate::ui;

/// Delete-confirmation sub-loop: reads exactly one decision key. `d` removes
/// the entry, `D` also removes the file it points at, anything else aborts.
pub fn run(terminal: &mut Term, app: &mut App) -> anyhow::Result<()> {
    if app.store.is_empty() {
        return Ok(());
    }
    app.with_mode(Mode::Delete, |app| loop {
        let size = terminal.size()?;
        app.sync_dimensions(size.width, size.height);
        terminal.draw(|f| ui::ui(f, app))?;

        let InputEvent::Key(key) = read_event()? else {
            continue;
        };
        if keybinds::is_char(&key, 'd') {
            app.delete_selected(false)?;
        } else if keybinds::is_char(&key, 'D') {
            app.delete_selected(true)?;
        }
        return Ok(());
    })
}
