use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::store::Record;

/// Selection details under the catalog list: year, title and path of the
/// selected record, or dashes when there is no selection.
pub fn draw_footer(f: &mut Frame, area: Rect, record: Option<&Record>) {
    let (year, title, path) = match record {
        Some(r) => (
            r.year.clone(),
            r.title.clone(),
            r.path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        None => ("-".to_string(), "-".to_string(), "-".to_string()),
    };
    let lines = vec![
        Line::from(format!("Year : {year}")),
        Line::from(format!("Title: {title}")),
        Line::from(format!("Path : {path}")),
    ];
    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(details, area);
}
