//! Validate the layout of staged changes

use std::path::Path;

use docshape::config::Config;
use docshape::output::{OutputMode, StructureReport};
use docshape::validator::{FsDirectoryLister, StructureRules};

use crate::git;

/// Validate staged files against the layout rules (pre-commit hook)
///
/// With explicit `paths`, validates those instead of the staged set.
pub fn check(paths: Vec<String>, ci: bool, mode: OutputMode) -> anyhow::Result<()> {
    let candidates = if paths.is_empty() {
        match git::staged::get_staged_files() {
            Ok(files) => files,
            Err(err) => {
                // Never block a workflow the tool cannot evaluate
                log::warn!("could not read staged files: {err:#}");
                StructureReport::skipped().render(mode);
                return Ok(());
            },
        }
    } else {
        paths
    };

    let config = Config::load(Path::new("."));
    let rules = StructureRules::with_extensions(config.structure.extensions);
    let lister = FsDirectoryLister::new(".");

    let result = rules.validate(&candidates, &lister);
    let report = StructureReport::new(candidates.len(), result);
    report.render(mode);

    if !report.passed {
        if !ci {
            std::process::exit(1);
        }
        anyhow::bail!("Repository structure violations");
    }

    Ok(())
}
