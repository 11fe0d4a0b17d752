use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::Mode;

/// One-line status header showing the active mode's command summary.
pub fn draw_header(f: &mut Frame, area: Rect, mode: Mode) {
    let status = Paragraph::new(mode.status_line())
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(status, area);
}
