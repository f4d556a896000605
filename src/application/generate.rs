//! Generate script use case

use crate::domain::intensity::max_intensity;
use crate::domain::script::{validate_commit_message, validate_name, validate_remote_host};
use crate::domain::{
    build_schedule, DateRange, Multiplier, PatternGrid, RepoTarget, Script, ScriptDialect,
    ScriptRenderer,
};
use crate::error::Result;
use crate::infrastructure::CalendarSource;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Everything needed to produce one script
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub username: String,
    pub repo: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Commits per level; derived from the reference calendar when absent
    pub lightest: Option<Multiplier>,
    pub dialect: ScriptDialect,
    /// Seed for the random grid; a fresh pattern per run when absent
    pub seed: Option<u64>,
    /// Fixed pattern used instead of a random grid
    pub pattern: Option<PatternGrid>,
    pub remote_host: String,
    pub commit_message: String,
}

/// Result of a successful generation
#[derive(Debug, Clone)]
pub struct Generation {
    pub range: DateRange,
    pub grid: PatternGrid,
    pub multiplier: Multiplier,
    pub script: Script,
}

/// Service running the pattern-to-script pipeline
pub struct GenerateService {
    calendar: Box<dyn CalendarSource>,
}

impl GenerateService {
    pub fn new(calendar: Box<dyn CalendarSource>) -> Self {
        GenerateService { calendar }
    }

    pub fn execute(&self, request: GenerateRequest) -> Result<Generation> {
        // 1. Reject bad names and ranges before any I/O or randomness
        validate_name("username", &request.username)?;
        validate_name("repository name", &request.repo)?;
        validate_remote_host(&request.remote_host)?;
        validate_commit_message(&request.commit_message)?;
        let range = DateRange::new(request.start, request.end)?;
        debug!(days = range.total_days(), "date range accepted");

        // 2. Resolve the multiplier
        let multiplier = match request.lightest {
            Some(multiplier) => {
                info!(%multiplier, "using explicit commits per level");
                multiplier
            }
            None => self.multiplier_from_calendar(&request.username)?,
        };

        // 3. Build the grid
        let grid = match request.pattern {
            Some(pattern) => pattern.fit_to(&range)?,
            None => match request.seed {
                Some(seed) => PatternGrid::random(&range, &mut StdRng::seed_from_u64(seed)),
                None => PatternGrid::random(&range, &mut rand::rng()),
            },
        };
        debug!(
            weeks = grid.width(),
            padding = grid.padding(),
            "pattern grid ready"
        );

        // 4. Expand into commit events and render
        let events = build_schedule(&grid, range.start(), multiplier);
        let target = RepoTarget {
            name: request.repo,
            owner: request.username,
            remote_host: request.remote_host,
        };
        let script = ScriptRenderer::new(request.dialect, request.commit_message)
            .render(&events, &target);
        info!(commits = script.commit_count(), "script rendered");

        Ok(Generation {
            range,
            grid,
            multiplier,
            script,
        })
    }

    fn multiplier_from_calendar(&self, username: &str) -> Result<Multiplier> {
        let document = self.calendar.fetch(username)?;
        let max_daily = max_intensity(&document)?;
        let multiplier = Multiplier::from_max_daily(max_daily);
        info!(max_daily, %multiplier, "derived commits per level from calendar");
        Ok(multiplier)
    }
}
