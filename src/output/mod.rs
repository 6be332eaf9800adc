//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_batch_result, print_check_result, print_dictionary, print_grid, print_rules};
