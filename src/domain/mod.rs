//! Domain layer - Pattern-to-schedule pipeline

pub mod date_range;
pub mod dialect;
pub mod grid;
pub mod intensity;
pub mod scale;
pub mod schedule;
pub mod script;

pub use date_range::DateRange;
pub use dialect::ScriptDialect;
pub use grid::PatternGrid;
pub use scale::Multiplier;
pub use schedule::{build_schedule, CommitEvent};
pub use script::{RepoTarget, Script, ScriptRenderer};
