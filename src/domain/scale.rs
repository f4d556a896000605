//! Commit multiplier derived from the busiest reference day

use crate::error::{BackfillError, Result};
use std::fmt;
use std::str::FromStr;

/// Highest intensity level of the pattern scale (levels are 0..=4)
pub const MAX_LEVEL: u8 = 4;

/// Largest commits-per-level value; keeps `level * multiplier` well inside `u32`
pub const MAX_MULTIPLIER: u32 = 10_000;

/// Number of commits one intensity level stands for. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Explicit multiplier, rejecting zero and anything above `MAX_MULTIPLIER`
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(BackfillError::InvalidInput(
                "commit count per level must be an integer > 0".to_string(),
            ));
        }
        if value > MAX_MULTIPLIER {
            return Err(BackfillError::InvalidInput(format!(
                "commit count per level {} is too large, the maximum is {}",
                value, MAX_MULTIPLIER
            )));
        }
        Ok(Multiplier(value))
    }

    /// `ceil(max_daily / 4)`, clamped to `1..=MAX_MULTIPLIER`
    pub fn from_max_daily(max_daily: u32) -> Self {
        Multiplier(max_daily.div_ceil(MAX_LEVEL as u32).clamp(1, MAX_MULTIPLIER))
    }

    /// Commits written for a cell at `level`
    pub fn commits_for(&self, level: u8) -> u32 {
        u32::from(level) * self.0
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier(1)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Multiplier {
    type Err = BackfillError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s.trim().parse().map_err(|_| {
            BackfillError::InvalidInput(format!(
                "'{}' is not a valid commit count, need an integer > 0",
                s.trim()
            ))
        })?;

        let value = u32::try_from(value).map_err(|_| {
            BackfillError::InvalidInput(format!(
                "'{}' is out of range, need an integer > 0",
                value
            ))
        })?;

        Multiplier::new(value)
    }
}
