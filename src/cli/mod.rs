//! CLI surface: argument parsing and display infrastructure.

pub mod args;
pub mod constants;

pub use args::Cli;
pub use constants::{display_level, set_display_level};
