//! Target shell dialects for the generated script

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dialect determines the shebang and how each commit action is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScriptDialect {
    /// Inline environment assignment, one line per commit
    #[default]
    Bash,
    /// POSIX `sh`: `export` line followed by the commit line
    Sh,
}

impl ScriptDialect {
    pub fn shebang(&self) -> &'static str {
        match self {
            ScriptDialect::Bash => "#!/usr/bin/env bash",
            ScriptDialect::Sh => "#!/bin/sh",
        }
    }

    /// Render one commit action with both timestamps set to `timestamp`
    pub fn commit_action(&self, timestamp: &str, message: &str) -> String {
        let commit = format!(
            "git commit --allow-empty -m {} > /dev/null",
            single_quote(message)
        );
        match self {
            ScriptDialect::Bash => format!(
                "GIT_AUTHOR_DATE={0} GIT_COMMITTER_DATE={0} {1}\n",
                timestamp, commit
            ),
            ScriptDialect::Sh => format!(
                "export GIT_AUTHOR_DATE={0} GIT_COMMITTER_DATE={0}\n{1}\n",
                timestamp, commit
            ),
        }
    }
}

/// Quote `text` as one literal shell word; `'` becomes `'\''`
pub fn single_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

impl fmt::Display for ScriptDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptDialect::Bash => write!(f, "bash"),
            ScriptDialect::Sh => write!(f, "sh"),
        }
    }
}

impl FromStr for ScriptDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bash" | "bash-style" => Ok(ScriptDialect::Bash),
            "sh" | "posix" | "shell-variant" => Ok(ScriptDialect::Sh),
            _ => Err(format!(
                "Invalid dialect: '{}'. Valid dialects are: bash, sh",
                s
            )),
        }
    }
}
