//! Writing the generated script to disk

use crate::domain::Script;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write `script` to `path` and mark it executable by its owner
pub fn save_script(path: &Path, script: &Script) -> Result<()> {
    fs::write(path, script.as_str())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }

    info!(path = %path.display(), commits = script.commit_count(), "script saved");
    Ok(())
}
