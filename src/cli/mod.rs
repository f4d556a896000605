//! CLI layer - Command-line interface

pub mod commands;
pub mod input;
pub mod output;

pub use commands::{Cli, Commands, GenerateArgs};
pub use input::collect_request;
pub use output::{format_config, format_grid, format_legend, format_next_steps, format_preview};
