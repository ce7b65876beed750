//! Structure validation rules for documentation content repositories
//!
//! Content lives in four areas, each with its own shape:
//! - `build/blueprints/[name]/` - one subdirectory per blueprint, holding
//!   markdown and images
//! - `discover/patterns/[name]/` - same shape as blueprints
//! - `discover/...` and `learn/...` - markdown and images at most one
//!   subdirectory deep
//!
//! Everything else (root-level files, dotted config paths, other top-level
//! directories) is out of scope and passes unchecked.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions permitted in content directories, matched case-sensitively
pub const DEFAULT_EXTENSIONS: &[&str] = &[".md", ".svg", ".png", ".jpg", ".jpeg"];

/// Errors that can occur while listing a directory
#[derive(Debug, Error)]
pub enum ListError {
    /// Directory does not exist
    #[error("directory not found: {0}")]
    NotFound(PathBuf),

    /// IO error while reading directory entries
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the directory
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Lists the entry names of a single directory level.
///
/// Injected into validation so the rules can be exercised against simulated
/// directory states. A listing failure is never fatal to validation.
pub trait DirectoryLister {
    /// Return the entry names (files and subdirectories) of `dir`.
    fn list(&self, dir: &str) -> Result<Vec<String>, ListError>;
}

/// Directory lister backed by the real filesystem
#[derive(Debug, Clone)]
pub struct FsDirectoryLister {
    root: PathBuf,
}

impl FsDirectoryLister {
    /// Create a lister resolving directories relative to `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, dir: &str) -> Result<Vec<String>, ListError> {
        let path = self.root.join(dir);
        if !path.is_dir() {
            return Err(ListError::NotFound(path));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&path).min_depth(1).max_depth(1) {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }
}

/// A staged path that breaks the layout conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The offending path, as staged
    pub path: String,
    /// The content area whose rule was broken (e.g. "build/blueprints")
    pub category: String,
    /// Short description of the broken rule
    pub message: String,
}

/// Outcome of validating one set of staged paths
#[derive(Debug, Default, Serialize)]
pub struct ValidationResult {
    /// Violations, in the same order as the offending input paths
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Whether the staged set passed validation
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// The layout rule set for a documentation content repository
#[derive(Debug, Clone)]
pub struct StructureRules {
    allowed_extensions: Vec<String>,
}

impl Default for StructureRules {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureRules {
    /// Rule set with the default allowed extensions
    #[must_use]
    pub fn new() -> Self {
        Self {
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Rule set with a custom allowed-extension list
    #[must_use]
    pub const fn with_extensions(extensions: Vec<String>) -> Self {
        Self { allowed_extensions: extensions }
    }

    /// Evaluate every path against the layout rules.
    ///
    /// Violations accumulate across the whole set so a single run reports
    /// every offending path. Empty path strings are ignored.
    #[must_use]
    pub fn validate(&self, paths: &[String], lister: &dyn DirectoryLister) -> ValidationResult {
        let mut violations = Vec::new();
        for path in paths.iter().filter(|p| !p.is_empty()) {
            if let Some(violation) = self.check_path(path, lister) {
                violations.push(violation);
            }
        }
        ValidationResult { violations }
    }

    fn check_path(&self, path: &str, lister: &dyn DirectoryLister) -> Option<Violation> {
        // Root-level files and dotted paths (config, CI metadata) are exempt
        if path.starts_with('.') {
            return None;
        }
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() <= 1 {
            return None;
        }

        match (segments[0], segments.get(1).copied()) {
            ("build", Some("blueprints")) => {
                self.check_bundle(path, &segments, "build/blueprints", lister)
            }
            ("discover", Some("patterns")) => {
                self.check_bundle(path, &segments, "discover/patterns", lister)
            }
            ("discover" | "learn", _) => self.check_flat(path, &segments),
            _ => None,
        }
    }

    /// Bundle areas hold one subdirectory per content unit, and that
    /// subdirectory must carry at least one entry with an allowed extension.
    fn check_bundle(
        &self,
        path: &str,
        segments: &[&str],
        category: &str,
        lister: &dyn DirectoryLister,
    ) -> Option<Violation> {
        if segments.len() < 4 {
            return Some(Violation {
                path: path.to_string(),
                category: category.to_string(),
                message: format!("Files in {category} must be in a subdirectory"),
            });
        }

        let dir = segments[..3].join("/");
        if !self.has_valid_entries(&dir, lister) {
            return Some(Violation {
                path: path.to_string(),
                category: category.to_string(),
                message: format!("Directory {dir} must contain .md and/or image files"),
            });
        }
        None
    }

    /// Flat areas hold content files directly, or one subdirectory deep
    /// (`learn/[category]/[name].md`).
    fn check_flat(&self, path: &str, segments: &[&str]) -> Option<Violation> {
        let top = segments[0];
        if segments.len() > 3 {
            return Some(Violation {
                path: path.to_string(),
                category: top.to_string(),
                message: format!("Files in {top} should be directly in subdirectories, not nested"),
            });
        }
        if !self.is_allowed(extension(path)) {
            return Some(Violation {
                path: path.to_string(),
                category: top.to_string(),
                message: format!("Only .md and image files allowed in {top}"),
            });
        }
        None
    }

    /// A listing failure counts as "no valid entries": an absent or
    /// unreadable bundle directory is a structural problem, not a crash.
    fn has_valid_entries(&self, dir: &str, lister: &dyn DirectoryLister) -> bool {
        match lister.list(dir) {
            Ok(entries) => entries.iter().any(|name| self.is_allowed(extension(name))),
            Err(err) => {
                log::debug!("listing {dir} failed: {err}");
                false
            }
        }
    }

    fn is_allowed(&self, ext: &str) -> bool {
        self.allowed_extensions.iter().any(|allowed| allowed == ext)
    }
}

/// Extension of the final path segment, including the leading dot.
///
/// A dot in the leading position is a hidden-file marker, not an extension,
/// so `.gitignore` has no extension while `notes.txt` has `.txt`.
fn extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}
