//! Daily intensity extraction from a contribution calendar document

use crate::error::{BackfillError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Matches `data-count="N"`, `data-count='N'` and `data-count=N`
fn count_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r#"data-count=["']?(\d+)["']?"#).unwrap())
}

/// Lazily yield one count per day, in document order (assumed oldest first).
///
/// Tokens without a count marker are ignored, as are counts too large to
/// represent.
pub fn extract_intensities(document: &str) -> impl Iterator<Item = u32> + '_ {
    count_marker()
        .captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
}

/// Highest daily count in the document
pub fn max_intensity(document: &str) -> Result<u32> {
    extract_intensities(document).max().ok_or_else(|| {
        BackfillError::Extraction(
            "No daily counts found in the contribution calendar".to_string(),
        )
    })
}
