//! Staged file detection

use std::process::Command;

/// Get the list of staged file paths, relative to the repository root.
///
/// Failure here (not a repository, git missing) is the caller's signal to
/// skip validation rather than abort.
pub fn get_staged_files() -> anyhow::Result<Vec<String>> {
    let output = Command::new("git").args(["diff", "--cached", "--name-only"]).output()?;

    if !output.status.success() {
        anyhow::bail!("git diff --cached failed");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(String::from).filter(|s| !s.is_empty()).collect())
}
