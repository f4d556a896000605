//! Expansion of a pattern grid into dated commit events

use crate::domain::date_range::dates_from;
use crate::domain::grid::PatternGrid;
use crate::domain::scale::Multiplier;
use chrono::NaiveDateTime;

/// One commit to write at `date`; `ordinal` counts commits within that day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitEvent {
    pub date: NaiveDateTime,
    pub ordinal: u32,
}

/// Pair grid cell `i` with day `start + i` and emit `level * multiplier`
/// events per day, in calendar order.
///
/// Zero cells (including padding) still advance the date but emit nothing.
pub fn build_schedule(
    grid: &PatternGrid,
    start: NaiveDateTime,
    multiplier: Multiplier,
) -> Vec<CommitEvent> {
    grid.values_in_date_order()
        .zip(dates_from(start))
        .flat_map(|(level, date)| {
            let commits = multiplier.commits_for(level);
            (0..commits).map(move |ordinal| CommitEvent { date, ordinal })
        })
        .collect()
}
