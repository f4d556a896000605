//! Infrastructure layer - External I/O and persistence

pub mod calendar;
pub mod config;
pub mod prompt;
pub mod script_file;

pub use calendar::{CalendarSource, FileCalendar, HttpCalendar};
pub use config::{Config, ConfigFile};
pub use prompt::Prompter;
pub use script_file::save_script;
