//! Weekday-by-week grid of intensity levels

use crate::domain::date_range::DateRange;
use crate::domain::scale::MAX_LEVEL;
use crate::error::{BackfillError, Result};
use rand::Rng;

/// Rows in a grid, one per weekday
pub const DAYS_PER_WEEK: usize = 7;

/// 7 x W matrix of levels in `0..=4`.
///
/// Cells are stored column-major (week by week), so index `i` is calendar
/// day `start + i`. The last `padding` cells round the range up to whole
/// weeks and are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    weeks: usize,
    padding: usize,
    cells: Vec<u8>,
}

/// Week count and trailing padding for a number of days
fn layout_for(total_days: usize) -> (usize, usize) {
    let padding = (DAYS_PER_WEEK - total_days % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    let weeks = (total_days + padding) / DAYS_PER_WEEK;
    (weeks, padding)
}

impl PatternGrid {
    /// Fill a grid sized to `range` with uniform random levels.
    ///
    /// Ranges of one week or less draw from `1..=4` so the pattern is never
    /// blank; longer ranges draw from `0..=4`.
    pub fn random<R: Rng>(range: &DateRange, rng: &mut R) -> Self {
        let (weeks, padding) = layout_for(range.total_days() as usize);
        let lowest = if weeks <= 1 { 1 } else { 0 };

        let cells = (0..weeks * DAYS_PER_WEEK)
            .map(|_| rng.random_range(lowest..=MAX_LEVEL))
            .collect();

        let mut grid = PatternGrid {
            weeks,
            padding: 0,
            cells,
        };
        grid.apply_padding(padding);
        grid
    }

    /// Parse a fixed pattern: 7 lines of digits `0-4`, one digit per week.
    ///
    /// Blank lines and whitespace inside a line are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<u8>> = text
            .lines()
            .map(|line| line.split_whitespace().collect::<String>())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c.to_digit(10) {
                        Some(level) if level <= MAX_LEVEL as u32 => Ok(level as u8),
                        _ => Err(BackfillError::Pattern(format!(
                            "'{}' is not a level between 0 and {}",
                            c, MAX_LEVEL
                        ))),
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<_>>()?;

        if rows.len() != DAYS_PER_WEEK {
            return Err(BackfillError::Pattern(format!(
                "expected {} rows, found {}",
                DAYS_PER_WEEK,
                rows.len()
            )));
        }

        let weeks = rows[0].len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != weeks) {
            return Err(BackfillError::Pattern(format!(
                "row {} has {} columns, row 1 has {}",
                index + 1,
                row.len(),
                weeks
            )));
        }

        let mut cells = Vec::with_capacity(weeks * DAYS_PER_WEEK);
        for week in 0..weeks {
            for row in &rows {
                cells.push(row[week]);
            }
        }

        Ok(PatternGrid {
            weeks,
            padding: 0,
            cells,
        })
    }

    /// Check a fixed pattern against `range` and zero its padding cells
    pub fn fit_to(mut self, range: &DateRange) -> Result<Self> {
        let (weeks, padding) = layout_for(range.total_days() as usize);
        if self.weeks != weeks {
            return Err(BackfillError::Pattern(format!(
                "pattern is {} weeks wide but the date range needs {}",
                self.weeks, weeks
            )));
        }

        self.apply_padding(padding);
        Ok(self)
    }

    /// Zero the last `padding` cells, from the bottom of the last column up
    fn apply_padding(&mut self, padding: usize) {
        if self.weeks == 0 {
            return;
        }
        let last_week = self.weeks - 1;
        for offset in 0..padding.min(DAYS_PER_WEEK) {
            self.cells[last_week * DAYS_PER_WEEK + (DAYS_PER_WEEK - 1 - offset)] = 0;
        }
        self.padding = padding;
    }

    /// Number of week columns
    pub fn width(&self) -> usize {
        self.weeks
    }

    pub fn height(&self) -> usize {
        DAYS_PER_WEEK
    }

    /// Trailing cells past the real end of the range
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Level at weekday `row`, week column `week`
    pub fn get(&self, row: usize, week: usize) -> Option<u8> {
        if row >= DAYS_PER_WEEK || week >= self.weeks {
            return None;
        }
        self.cells.get(week * DAYS_PER_WEEK + row).copied()
    }

    /// Levels in calendar order: week by week, weekday rows top to bottom
    pub fn values_in_date_order(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.weeks).flat_map(move |week| {
            (0..DAYS_PER_WEEK).map(move |row| self.get(row, week).unwrap_or(0))
        })
    }

    /// One weekday row across all weeks
    pub fn row(&self, row: usize) -> Vec<u8> {
        (0..self.weeks)
            .map(|week| self.get(row, week).unwrap_or(0))
            .collect()
    }

    /// Sum of every level in the grid
    pub fn total_level(&self) -> u64 {
        self.cells.iter().map(|&level| level as u64).sum()
    }
}
