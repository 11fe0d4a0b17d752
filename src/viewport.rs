use crate::app::settings::keybinds;
use crate::input::KeyEvent;

/// Placeholder glyph rendered for rows beyond the end of the backing sequence.
pub const PLACEHOLDER: &str = "~";

/// Anything a [`Viewport`] can display: a length plus a rendered string per
/// index. Out-of-range indices yield `None`, never an error.
pub trait RowSource {
    fn len(&self) -> usize;
    fn render(&self, index: usize) -> Option<String>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A scrolling window mapping a fixed-height display onto an unbounded
/// backing sequence.
///
/// The viewport owns only its geometry and the `(scroll, select)` offsets;
/// the backing size is passed into each operation so the same viewport can
/// track a sequence that grows and shrinks underneath it. Whenever the
/// backing size is non-zero the selected row stays inside the visible
/// window: `scroll <= select < scroll + height`.
#[derive(Debug, Clone)]
pub struct Viewport {
    height: usize,
    width: usize,
    scroll: usize,
    select: usize,
}

impl Viewport {
    pub fn new(height: usize, width: usize) -> Self {
        Viewport {
            height: height.max(1),
            width,
            scroll: 0,
            select: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn select(&self) -> usize {
        self.select
    }

    /// Restore a previously captured `(select, scroll)` pair. The caller is
    /// expected to follow up with [`Viewport::clamp`] once the backing
    /// sequence has been refreshed.
    pub fn set_position(&mut self, select: usize, scroll: usize) {
        self.select = select;
        self.scroll = scroll;
    }

    /// Step the selection down one row. Crossing the bottom of the window
    /// shifts the scroll by a full page, not by one row.
    pub fn move_down(&mut self, size: usize) {
        if size > 0 && self.select + 1 < size {
            self.select += 1;
            if self.select >= self.scroll + self.height {
                self.scroll += self.height;
            }
        }
    }

    /// Step the selection up one row, page-shifting the scroll when the
    /// selection leaves the top of the window.
    pub fn move_up(&mut self) {
        if self.select > 0 {
            self.select -= 1;
            if self.select < self.scroll {
                self.scroll = self.scroll.saturating_sub(self.height);
            }
        }
    }

    pub fn jump_top(&mut self) {
        self.select = 0;
        self.scroll = 0;
    }

    /// Select the last row, advancing the scroll in whole-page steps until
    /// that row is visible.
    pub fn jump_bottom(&mut self, size: usize) {
        if size == 0 {
            self.jump_top();
            return;
        }
        self.select = size - 1;
        while self.scroll + self.height <= size - 1 {
            self.scroll += self.height;
        }
    }

    /// Advance a full page. When no complete page fits ahead of the
    /// selection, the selection clamps to the last row and the scroll only
    /// advances if there is room.
    pub fn page_down(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        if self.select + self.height <= size - 1 {
            self.select += self.height;
            self.scroll += self.height;
        } else {
            if self.scroll + self.height <= size - 1 {
                self.scroll += self.height;
            }
            self.select = size - 1;
        }
    }

    /// Retreat a full page, snapping to the top when less than a page of
    /// rows remains above the selection.
    pub fn page_up(&mut self) {
        if self.select >= self.height {
            self.select -= self.height;
            self.scroll = self.scroll.saturating_sub(self.height);
        } else {
            self.select = 0;
            self.scroll = 0;
        }
    }

    /// Move the window down one row without forcing the selection along;
    /// the selection is dragged only when it would fall out of the window.
    pub fn scroll_down(&mut self, size: usize) {
        if size > 0 && self.scroll < size - 1 {
            self.scroll += 1;
            if self.select < self.scroll {
                self.select = self.scroll;
            }
        }
    }

    /// Move the window up one row, dragging the selection only as far as
    /// needed to keep it visible.
    pub fn scroll_up(&mut self) {
        if self.scroll > 0 {
            self.scroll -= 1;
            if self.select >= self.scroll + self.height {
                self.select = self.scroll + self.height - 1;
            }
        }
    }

    /// Update the window geometry and re-apply the up/down scroll
    /// corrections so the selection is visible again without resetting the
    /// scroll position unnecessarily.
    pub fn resize(&mut self, height: usize, width: usize, size: usize) {
        self.height = height.max(1);
        self.width = width;
        self.clamp(size);
    }

    /// Re-establish the viewport invariants after the backing sequence
    /// changed shape. An empty sequence pins both offsets to zero.
    pub fn clamp(&mut self, size: usize) {
        if size == 0 {
            self.select = 0;
            self.scroll = 0;
            return;
        }
        if self.select >= size {
            self.select = size - 1;
        }
        while self.select < self.scroll {
            self.scroll = self.scroll.saturating_sub(self.height);
        }
        while self.select >= self.scroll + self.height {
            self.scroll += self.height;
        }
    }

    /// Rendered text for the `line`-th visible row, or the placeholder glyph
    /// when that row lies beyond the backing sequence.
    pub fn row(&self, source: &dyn RowSource, line: usize) -> String {
        source
            .render(self.scroll + line)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Built-in navigation table shared by every list screen. Returns `true`
    /// when the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent, size: usize) -> bool {
        if keybinds::is_down(key) {
            self.move_down(size);
        } else if keybinds::is_up(key) {
            self.move_up();
        } else if keybinds::is_top(key) {
            self.jump_top();
        } else if keybinds::is_bottom(key) {
            self.jump_bottom(size);
        } else if keybinds::is_page_down(key) {
            self.page_down(size);
        } else if keybinds::is_page_up(key) {
            self.page_up();
        } else if keybinds::is_scroll_down(key) {
            self.scroll_down(size);
        } else if keybinds::is_scroll_up(key) {
            self.scroll_up();
        } else {
            return false;
        }
        true
    }
}
