//! Interactive TUI interface

pub mod app;
pub mod rendering;
pub mod theme;

pub use app::{App, Message, MessageStyle, View, run_tui};
pub use theme::Theme;
