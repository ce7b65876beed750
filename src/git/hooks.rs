//! Git hooks installation
//!
//! docshape installs a single pre-commit hook that validates the layout of
//! staged content files before every commit.

use std::fs;
use std::path::Path;

/// Install the pre-commit hook
pub fn install_pre_commit() -> anyhow::Result<()> {
    let hooks_dir = Path::new(".git/hooks");
    if !hooks_dir.exists() {
        anyhow::bail!("Not a git repository (.git/hooks not found)");
    }

    let hook_path = hooks_dir.join("pre-commit");
    let hook_content = r"#!/bin/sh
# docshape pre-commit hook
# Validates the layout of staged content files

docshape check || exit 1
";

    if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        if existing.contains("docshape") {
            return Ok(()); // Already installed
        }
        // Append to existing hook
        let new_content = format!("{}\n\n# docshape\n{hook_content}", existing.trim());
        fs::write(&hook_path, new_content)?;
    } else {
        fs::write(&hook_path, hook_content)?;
    }

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    Ok(())
}
