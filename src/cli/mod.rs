//! Command-line interface module
//!
//! Implements the render command: read a Markdown file (or the built-in
//! sample), render it for the terminal and print the result.

pub mod render;
