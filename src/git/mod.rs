//! Git integration
//!
//! Provides git-native operations:
//! - Staged file detection
//! - Hooks installation

pub mod hooks;
pub mod staged;
