use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const HELP_TEXT: &str = "\
Navigating:
    k       Select Up
    j       Select Down
    ^B      Page Up
    ^F      Page Down
    ^Y      Scroll Up
    ^E      Scroll Down
    g       Jump to Top
    G       Jump to Bottom

General:
    l       Go inside / Play
    h       Go back
    space   Select
    a       Add from browser
    d       Delete entry
    z       Sort
    !       Toggle seen mark
    q       Quit, Return";

/// Full-pane help screen.
pub fn draw_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_TEXT)
        .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, area);
}

/// Centered single-line input prompt drawn over whatever screen is active.
pub fn draw_prompt(f: &mut Frame, area: Rect, label: &str, buffer: &str) {
    let popup = centered_rect(area, 60, 5);
    let lines = vec![
        Line::from(label.to_string()),
        Line::from(""),
        Line::from(format!("> {buffer}")),
    ];
    let prompt = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(Clear, popup);
    f.render_widget(prompt, popup);
}

// Center a `width` x `height` box inside `area`, shrinking to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
