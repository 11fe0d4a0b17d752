use tracing::info;

use crate::app::settings::Settings;
use crate::app::App;
use crate::input::{read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, Term};
use crate::store::Store;
use crate::ui;

/// Load the catalog and run the main loop until the user quits.
pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    // Load before touching the terminal so a malformed catalog aborts with a
    // readable message instead of a garbled alternate screen.
    let store = Store::load(&settings.catalog_file)?;
    info!("catalog loaded: {} entries", store.len());

    let mut app = App::new(store, settings)?;
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app);
    restore_terminal(terminal)?;
    result
}

// One blocking key per iteration; redraw first, then dispatch. Resize events
// fall through to the geometry sync at the top of the next iteration.
fn run_loop(terminal: &mut Term, app: &mut App) -> anyhow::Result<()> {
    loop {
        let size = terminal.size()?;
        app.sync_dimensions(size.width, size.height);
        terminal.draw(|f| ui::ui(f, app))?;
        match read_event()? {
            InputEvent::Key(key) => {
                if handlers::handle_key(terminal, app, &key)? {
                    info!("quit requested");
                    return Ok(());
                }
            }
            InputEvent::Resize(_, _) | InputEvent::Other => {}
        }
    }
}
