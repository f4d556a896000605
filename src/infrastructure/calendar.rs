//! Sources for the reference contribution calendar

use crate::error::{BackfillError, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Request timeout for calendar fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Abstract source of a user's contribution calendar document
pub trait CalendarSource {
    /// Return the raw calendar document for `username`
    fn fetch(&self, username: &str) -> Result<String>;
}

/// Fetches `{base_url}users/{username}/contributions` over HTTP
#[derive(Debug, Clone)]
pub struct HttpCalendar {
    base_url: String,
    timeout: Duration,
}

impl HttpCalendar {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        HttpCalendar {
            base_url,
            timeout: FETCH_TIMEOUT,
        }
    }

    pub fn url_for(&self, username: &str) -> String {
        format!("{}users/{}/contributions", self.base_url, username)
    }
}

impl CalendarSource for HttpCalendar {
    fn fetch(&self, username: &str) -> Result<String> {
        let url = self.url_for(username);
        info!(%url, "fetching contribution calendar");

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();

        match agent.get(&url).call() {
            Ok(response) => {
                let body = response.into_string().map_err(|e| {
                    BackfillError::Fetch(format!("could not read response from {}: {}", url, e))
                })?;
                debug!(bytes = body.len(), "calendar fetched");
                Ok(body)
            }
            Err(ureq::Error::Status(code, _)) => Err(BackfillError::Fetch(format!(
                "{} returned HTTP {}",
                url, code
            ))),
            Err(e) => Err(BackfillError::Fetch(format!("{}: {}", url, e))),
        }
    }
}

/// Reads a previously saved calendar document from disk
#[derive(Debug, Clone)]
pub struct FileCalendar {
    path: PathBuf,
}

impl FileCalendar {
    pub fn new(path: PathBuf) -> Self {
        FileCalendar { path }
    }
}

impl CalendarSource for FileCalendar {
    fn fetch(&self, _username: &str) -> Result<String> {
        info!(path = %self.path.display(), "reading contribution calendar");
        fs::read_to_string(&self.path).map_err(|e| {
            BackfillError::Fetch(format!("could not read {}: {}", self.path.display(), e))
        })
    }
}
