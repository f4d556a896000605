//! Error types for backfill

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for backfill
#[derive(Debug, Error)]
pub enum BackfillError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("End date {end} must be after start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Failed to fetch contribution calendar: {0}")]
    Fetch(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackfillError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BackfillError::InvalidInput(_) | BackfillError::InvalidDate(_) => 2,
            BackfillError::InvalidRange { .. } => 3,
            BackfillError::Fetch(_) => 4,
            BackfillError::Extraction(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BackfillError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD (or YYYY MM DD)\n\
                    Example: backfill generate --start 2024-01-01 --end 2024-12-31",
                    value
                )
            }
            BackfillError::InvalidRange { .. } => {
                format!(
                    "{}\n\n\
                    The range is [start, end): the end day itself receives no commits.\n\
                    Example: --start 2024-01-01 --end 2024-01-08 covers one full week",
                    self
                )
            }
            BackfillError::Fetch(msg) => {
                format!(
                    "Failed to fetch contribution calendar: {}\n\n\
                    Suggestions:\n\
                    • Check the username and your network connection\n\
                    • Read a saved calendar instead: --calendar contributions.html\n\
                    • Skip the calendar entirely: --lightest <commits>",
                    msg
                )
            }
            BackfillError::Extraction(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Make sure the calendar document contains data-count=\"N\" markers\n\
                    • Set the commit count per level directly: --lightest <commits>",
                    msg
                )
            }
            BackfillError::Pattern(msg) => {
                format!(
                    "Pattern error: {}\n\n\
                    A pattern file has 7 lines (one per weekday) of digits 0-4,\n\
                    one digit per week of the date range.",
                    msg
                )
            }
            BackfillError::Config(msg) => {
                if msg.contains("Invalid dialect") {
                    format!(
                        "{}\n\n\
                        Valid dialects: bash, sh\n\
                        Example: backfill config dialect sh",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BackfillError
pub type Result<T> = std::result::Result<T, BackfillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_error_class() {
        assert_eq!(BackfillError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(BackfillError::InvalidDate("x".into()).exit_code(), 2);
        let range = BackfillError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(range.exit_code(), 3);
        assert_eq!(BackfillError::Fetch("x".into()).exit_code(), 4);
        assert_eq!(BackfillError::Extraction("x".into()).exit_code(), 5);
        assert_eq!(BackfillError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_invalid_date_suggestions() {
        let err = BackfillError::InvalidDate("2024-13-01".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("2024-13-01"));
    }

    #[test]
    fn test_invalid_range_message() {
        let err = BackfillError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("End date 2024-01-01 must be after start date 2024-01-08"));
        assert!(msg.contains("[start, end)"));
    }

    #[test]
    fn test_fetch_suggestions() {
        let err = BackfillError::Fetch("status 404".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("status 404"));
        assert!(msg.contains("--calendar"));
        assert!(msg.contains("--lightest"));
    }

    #[test]
    fn test_config_invalid_dialect_suggestions() {
        let err = BackfillError::Config("Invalid dialect: 'zsh'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("bash, sh"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = BackfillError::InvalidInput("repository name is empty".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Invalid input: repository name is empty");
    }
}
