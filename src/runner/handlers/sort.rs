use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::{read_event, InputEvent};
use crate::runner::terminal::Term;
use crate::store::SortField;
use crate::ui;

/// Sort-choice sub-loop: one key picks the field (or flips the direction),
/// then the mode exits.
pub fn run(terminal: &mut Term, app: &mut App) -> anyhow::Result<()> {
    app.with_mode(Mode::Sort, |app| loop {
        let size = terminal.size()?;
        app.sync_dimensions(size.width, size.height);
        terminal.draw(|f| ui::ui(f, app))?;

        let InputEvent::Key(key) = read_event()? else {
            continue;
        };
        if keybinds::is_char(&key, 'y') {
            app.store.sort_by(SortField::Year);
        } else if keybinds::is_char(&key, 't') {
            app.store.sort_by(SortField::Title);
        } else if keybinds::is_char(&key, '!') {
            app.store.sort_by(SortField::Seen);
        } else if keybinds::is_char(&key, 'r') {
            app.store.reverse();
        }
        return Ok(());
    })
}
