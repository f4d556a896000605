//! Output formatting utilities

use crate::application::Generation;
use crate::domain::scale::MAX_LEVEL;
use crate::domain::{Multiplier, PatternGrid};
use crate::infrastructure::Config;

/// Weekday labels for grid rows
const ROW_LABELS: [&str; 7] = ["d1", "d2", "d3", "d4", "d5", "d6", "d7"];

/// Format the level legend: what each grid digit turns into
pub fn format_legend(multiplier: Multiplier) -> String {
    let mut output = String::from("Commits will be added as per the following grid, where:\n");
    for level in 0..=MAX_LEVEL {
        output.push_str(&format!(
            "'{}' = {} commits\n",
            level,
            multiplier.commits_for(level)
        ));
    }
    output
}

/// Format a grid as 7 rows of digits, weeks left to right
pub fn format_grid(grid: &PatternGrid) -> String {
    let mut output = String::new();
    for (row, label) in ROW_LABELS.iter().enumerate().take(grid.height()) {
        let digits: String = grid
            .row(row)
            .iter()
            .map(|level| char::from(b'0' + level))
            .collect();
        output.push_str(&format!("{}  {}\n", label, digits));
    }
    output
}

/// Format the full preview shown before the script is written
pub fn format_preview(generation: &Generation) -> String {
    format!(
        "{}\n{}\nRange: {} to {} ({} days, {} weeks)\nTotal commits: {}\n",
        format_legend(generation.multiplier),
        format_grid(&generation.grid),
        generation.range.start().date(),
        generation.range.end().date(),
        generation.range.total_days(),
        generation.grid.width(),
        generation.script.commit_count()
    )
}

/// Format the hint printed once the script is on disk
pub fn format_next_steps(script_name: &str, repo: &str, config: &Config) -> String {
    format!(
        "{} saved.\nCreate a new, empty repository named {} at {}, \
         then move the script to your root folder and run it.",
        script_name, repo, config.base_url
    )
}

/// Format config for `config --list`
pub fn format_config(config: &Config) -> String {
    format!(
        "username = {}\nbase_url = {}\nremote_host = {}\ndialect = {}\noutput = {}\ncommit_message = {}\n",
        config.username.as_deref().unwrap_or(""),
        config.base_url,
        config.remote_host,
        config.dialect,
        config.output,
        config.commit_message
    )
}
