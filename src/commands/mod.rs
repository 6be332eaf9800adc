//! Command implementations

pub mod batch;
pub mod check;
pub mod simple;

pub use batch::{BatchResult, load_word_list, run_batch};
pub use check::{CheckResult, check_word};
pub use simple::{SimpleCommand, parse_command, run_simple, run_simple_with};
