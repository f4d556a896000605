//! backfill - Paint a contribution pattern with scripted commits
//!
//! Turns a date range and a reference contribution calendar into a shell
//! script that creates a repository whose commit history, day by day,
//! reproduces a 7-row intensity pattern.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BackfillError;
