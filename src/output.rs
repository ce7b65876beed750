//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::validator::{ValidationResult, Violation};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a structure check
#[derive(Debug, Serialize)]
pub struct StructureReport {
    /// Whether validation passed
    pub passed: bool,
    /// Number of candidate paths examined
    pub files_checked: usize,
    /// Whether validation was skipped (staged set unavailable)
    pub skipped: bool,
    /// Violations, in input order
    pub violations: Vec<Violation>,
}

/// Directory shapes the rules expect, shown after any failure
const EXPECTED_STRUCTURE: &str = "\
├── build/blueprints/[name]/
│   ├── [name].md
│   └── [images]
├── discover/patterns/[name]/
│   ├── pattern.md
│   └── [images]
├── discover/services-frameworks/
│   └── [name].md
└── learn/[category]/
    └── [name].md";

impl StructureReport {
    /// Build a report from a validation result
    #[must_use]
    pub fn new(files_checked: usize, result: ValidationResult) -> Self {
        Self {
            passed: result.passed(),
            files_checked,
            skipped: false,
            violations: result.violations,
        }
    }

    /// Report for a run where the staged set could not be determined
    #[must_use]
    pub const fn skipped() -> Self {
        Self {
            passed: true,
            files_checked: 0,
            skipped: true,
            violations: Vec::new(),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.skipped {
            println!("Warning: could not read staged files, skipping structure validation");
            return;
        }

        if self.passed {
            println!("{}", "✅ Repository structure validation passed".green());
            return;
        }

        println!("{}", "Repository structure validation failed:".red());
        for violation in &self.violations {
            println!("❌ {}: {}", violation.path, violation.message);
        }
        println!("\nExpected structure:");
        println!("{EXPECTED_STRUCTURE}");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
