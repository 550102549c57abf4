//! Presentation layer for toolforge
//!
//! This crate contains CLI definitions, argument parsing for tool calls,
//! and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::args::build_call;
pub use cli::commands::{Cli, Command};
pub use output::console::{ConsoleFormatter, JsonFormatter, disable_color, formatter_for};
pub use output::formatter::OutputFormatter;
