//! Rendering of commit events into a bootstrap-and-push script

use crate::domain::dialect::ScriptDialect;
use crate::domain::schedule::CommitEvent;
use crate::error::{BackfillError, Result};

/// Timestamp format handed to GIT_AUTHOR_DATE / GIT_COMMITTER_DATE
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Placeholder file created next to README.md
const MARKER_FILE: &str = "backfill";

/// Where the generated history gets pushed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    /// Local directory and remote repository name
    pub name: String,
    /// Owner handle on the remote host
    pub owner: String,
    /// SSH-style host prefix, e.g. `git@github.com`
    pub remote_host: String,
}

impl RepoTarget {
    pub fn remote_url(&self) -> String {
        format!("{}:{}/$REPO.git", self.remote_host, self.owner)
    }
}

/// Finished script text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    text: String,
    commits: usize,
}

impl Script {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of commit actions in the script
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

/// Check a repository or owner name against `[A-Za-z0-9._-]+`
pub fn validate_name(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BackfillError::InvalidInput(format!("{} is empty", what)));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(BackfillError::InvalidInput(format!(
            "{} '{}' may only contain letters, digits, '.', '_' and '-'",
            what, value
        )));
    }
    Ok(())
}

/// Check an SSH-style host prefix such as `git@github.com`
pub fn validate_remote_host(value: &str) -> Result<()> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '@' | ':');
    if value.is_empty() || !value.chars().all(allowed) {
        return Err(BackfillError::InvalidInput(format!(
            "remote host '{}' may only contain letters, digits, '.', '_', '-', '@' and ':'",
            value
        )));
    }
    Ok(())
}

/// Commit messages are single-quoted in the script; control characters
/// would still split an action across lines
pub fn validate_commit_message(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BackfillError::InvalidInput(
            "commit message is empty".to_string(),
        ));
    }
    if value.chars().any(char::is_control) {
        return Err(BackfillError::InvalidInput(
            "commit message must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Renders commit events in the order received, one action per event
#[derive(Debug, Clone)]
pub struct ScriptRenderer {
    dialect: ScriptDialect,
    commit_message: String,
}

impl ScriptRenderer {
    pub fn new(dialect: ScriptDialect, commit_message: impl Into<String>) -> Self {
        ScriptRenderer {
            dialect,
            commit_message: commit_message.into(),
        }
    }

    pub fn render(&self, events: &[CommitEvent], target: &RepoTarget) -> Script {
        let mut actions = String::new();
        for event in events {
            let timestamp = event.date.format(TIMESTAMP_FORMAT).to_string();
            actions.push_str(&self.dialect.commit_action(&timestamp, &self.commit_message));
        }

        let text = format!(
            "{shebang}\n\
             REPO={repo}\n\
             git init $REPO\n\
             cd $REPO\n\
             touch README.md\n\
             git add README.md\n\
             touch {marker}\n\
             git add {marker}\n\
             {actions}\
             git branch -M main\n\
             git remote add origin {remote}\n\
             git pull origin main\n\
             git push -u origin main\n",
            shebang = self.dialect.shebang(),
            repo = target.name,
            marker = MARKER_FILE,
            actions = actions,
            remote = target.remote_url(),
        );

        Script {
            text,
            commits: events.len(),
        }
    }
}
