use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, Mode};

pub mod footer;
pub mod header;
pub mod list;
pub mod modal;

/// Draw the screen for the active mode. Sort and delete confirmation happen
/// over the library screen; prompts are drawn on top by the prompt handler.
pub fn ui(f: &mut Frame, app: &App) {
    match app.modes.current() {
        Mode::Browse | Mode::Prompt => browse_screen(f, app),
        Mode::Help => help_screen(f, app),
        Mode::Main | Mode::Sort | Mode::Delete => library_screen(f, app),
    }
}

// Status line (1), catalog list, selection details (4).
fn library_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(f.area());

    header::draw_header(f, chunks[0], app.modes.current());
    list::draw_list(f, chunks[1], &app.library, &app.store);
    footer::draw_footer(f, chunks[2], app.selected_record());
}

// Status line (1), directory listing.
fn browse_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)].as_ref())
        .split(f.area());

    header::draw_header(f, chunks[0], app.modes.current());
    list::draw_list(f, chunks[1], &app.browser.view, &app.browser);
}

fn help_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)].as_ref())
        .split(f.area());

    header::draw_header(f, chunks[0], app.modes.current());
    modal::draw_help(f, chunks[1]);
}
