pub mod core;
pub mod modes;
pub mod settings;

pub use core::App;
pub use modes::{Mode, ModeController};
