//! Terminal display module
//!
//! Handles color decisions, terminal width detection and writing output.

mod output;
mod terminal;

pub use output::print_styled;
pub use terminal::{should_use_colors, terminal_width};
