//! Initialize docshape in a repository

use std::fs;
use std::path::Path;

use docshape::config::DOCSHAPE_TOML;
use docshape::output::OutputMode;

use crate::git;

/// Initialize docshape in the current repository
pub fn init(force: bool, _mode: OutputMode) -> anyhow::Result<()> {
    let config_path = Path::new(DOCSHAPE_TOML);

    if config_path.exists() && !force {
        println!("Already initialized (.docshape.toml exists).");
        println!("Use --force to reinitialize.");
        return Ok(());
    }

    println!("Initializing docshape...\n");

    let config_toml = r#"# docshape structure rules

# Extensions permitted in content directories. Uncomment to override the
# defaults (.md plus common image formats):
#
# [structure]
# extensions = [".md", ".svg", ".png", ".jpg", ".jpeg"]
"#;
    fs::write(config_path, config_toml)?;
    println!("  Created .docshape.toml");

    git::hooks::install_pre_commit()?;
    println!("  Installed pre-commit hook");

    println!("\ndocshape initialized!");
    println!("\nNext steps:");
    println!("  docshape check          validate the staged set");
    println!("  docshape check --ci     same, for CI pipelines");

    Ok(())
}
