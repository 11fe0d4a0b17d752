pub mod app;
pub mod browser;
pub mod input;
pub mod lockfile;
pub mod player;
pub mod runner;
pub mod store;
pub mod ui;
pub mod viewport;

pub use crate::app::{App, Mode, ModeController};
pub use crate::browser::Browser;
pub use crate::store::{Record, SortField, Store, StoreError};
pub use crate::viewport::{RowSource, Viewport};
