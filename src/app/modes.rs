/// The active command context. Each mode gates which keys are meaningful and
/// supplies the status line rendered in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Main,
    Browse,
    Sort,
    Delete,
    Prompt,
    Help,
}

impl Mode {
    /// Fixed status-line text for this mode.
    pub fn status_line(self) -> &'static str {
        match self {
            Mode::Main => "space:Play  a:Add  d:Delete  z:Sort  !:Mark  ?:Help  q:Quit",
            Mode::Browse => "hjkl:Navigate  space:Select  q:Back",
            Mode::Sort => "Sort by?  y:Year  t:Title  !:Seen  r:Reverse  q:Back",
            Mode::Delete => "Really delete?  d:DeleteEntry  D:DeleteWithFile  q:Abort",
            Mode::Prompt => "Enter:Submit  Esc:Cancel",
            Mode::Help => "Press any key to return",
        }
    }
}

/// Holder of the current mode label.
///
/// `enter` hands back the label that was active so the caller can `restore`
/// it when its scope ends; pairing the two is what keeps nesting correct at
/// any depth, since every scope remembers its own entry-time value. Use
/// [`crate::app::App::with_mode`] rather than calling these directly.
#[derive(Debug, Default)]
pub struct ModeController {
    current: Mode,
}

impl ModeController {
    pub fn current(&self) -> Mode {
        self.current
    }

    pub fn enter(&mut self, mode: Mode) -> Mode {
        std::mem::replace(&mut self.current, mode)
    }

    pub fn restore(&mut self, previous: Mode) {
        self.current = previous;
    }
}
