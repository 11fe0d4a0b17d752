use crate::app::{App, Mode};
use crate::input::{read_event, InputEvent};
use crate::runner::terminal::Term;
use crate::ui;

/// Help screen: any key returns; resizes just redraw.
pub fn run(terminal: &mut Term, app: &mut App) -> anyhow::Result<()> {
    app.with_mode(Mode::Help, |app| loop {
        let size = terminal.size()?;
        app.sync_dimensions(size.width, size.height);
        terminal.draw(|f| ui::ui(f, app))?;

        if let InputEvent::Key(_) = read_event()? {
            return Ok(());
        }
    })
}
