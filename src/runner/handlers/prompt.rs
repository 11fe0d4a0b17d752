use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::{keyboard, read_event, InputEvent};
use crate::runner::terminal::Term;
use crate::ui;

/// Modal line editor drawn over the active screen. Returns `None` when the
/// user cancels with Esc.
pub fn read_line(
    terminal: &mut Term,
    app: &mut App,
    label: &str,
) -> anyhow::Result<Option<String>> {
    app.with_mode(Mode::Prompt, |app| {
        let mut buffer = String::new();
        loop {
            let size = terminal.size()?;
            app.sync_dimensions(size.width, size.height);
            terminal.draw(|f| {
                ui::ui(f, app);
                ui::modal::draw_prompt(f, f.area(), label, &buffer);
            })?;

            let InputEvent::Key(key) = read_event()? else {
                continue;
            };
            if keybinds::is_enter(&key) {
                return Ok(Some(buffer));
            } else if keybinds::is_esc(&key) {
                return Ok(None);
            } else if keybinds::is_backspace(&key) {
                buffer.pop();
            } else if let Some(c) = keyboard::printable_char(&key) {
                buffer.push(c);
            }
        }
    })
}
