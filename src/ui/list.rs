use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem};
use ratatui::Frame;

use crate::viewport::{RowSource, Viewport};

/// Render the visible window of `source` as positioned by `view`.
///
/// The viewport owns scrolling and selection, so rows are materialized
/// directly instead of going through `ListState`; rows past the end of the
/// backing sequence come back as the placeholder glyph.
pub fn draw_list(f: &mut Frame, area: Rect, view: &Viewport, source: &dyn RowSource) {
    let mut items = Vec::with_capacity(area.height as usize);
    for line in 0..area.height as usize {
        let absolute = view.scroll() + line;
        let mut item = ListItem::new(Line::from(view.row(source, line)));
        if absolute == view.select() {
            item = item.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        items.push(item);
    }
    f.render_widget(List::new(items), area);
}
