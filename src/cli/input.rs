//! Turning flags, config and prompts into a generate request

use crate::application::GenerateRequest;
use crate::cli::GenerateArgs;
use crate::domain::date_range::parse_day;
use crate::domain::{Multiplier, PatternGrid, ScriptDialect};
use crate::error::{BackfillError, Result};
use crate::infrastructure::{Config, Prompter};
use std::fs;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Build a request from flags, falling back to config, then to prompts
pub fn collect_request<R: BufRead, W: Write>(
    args: &GenerateArgs,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<GenerateRequest> {
    let mut prompted = false;

    let username = match args.user.clone().or_else(|| config.username.clone()) {
        Some(user) => user,
        None => {
            prompted = true;
            prompter.ask_required("Owner username: ")?
        }
    };

    let repo = match &args.repo {
        Some(repo) => repo.clone(),
        None => {
            prompted = true;
            prompter.ask_required("Repository name: ")?
        }
    };

    let start = match &args.start {
        Some(start) => start.clone(),
        None => {
            prompted = true;
            prompter.ask_required("Start date (YYYY-MM-DD): ")?
        }
    };
    let start = parse_day(&start)?;

    let end = match &args.end {
        Some(end) => end.clone(),
        None => {
            prompted = true;
            prompter.ask_required("End date, exclusive (YYYY-MM-DD): ")?
        }
    };
    let end = parse_day(&end)?;

    let lightest = match &args.lightest {
        Some(value) => Some(Multiplier::from_str(value)?),
        None if prompted => {
            prompter.say(
                "By default the darkest level matches the busiest day in the owner's \
                 contribution calendar. Enter how many commits one level should have, \
                 or leave blank for the default.",
            )?;
            prompter
                .ask("Commits per level: ")?
                .map(|value| Multiplier::from_str(&value))
                .transpose()?
        }
        None => None,
    };

    let dialect = match &args.dialect {
        Some(value) => ScriptDialect::from_str(value).map_err(BackfillError::InvalidInput)?,
        None => config.dialect,
    };

    let pattern = match &args.pattern {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                BackfillError::Pattern(format!("could not read {}: {}", path.display(), e))
            })?;
            Some(PatternGrid::parse(&text)?)
        }
        None => None,
    };

    Ok(GenerateRequest {
        username,
        repo,
        start,
        end,
        lightest,
        dialect,
        seed: args.seed,
        pattern,
        remote_host: config.remote_host.clone(),
        commit_message: config.commit_message.clone(),
    })
}
