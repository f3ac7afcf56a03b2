//! Scan dispatch and the engines that perform the actual inspection.

pub mod dispatch;
pub mod engine;
pub mod filesystem;
pub mod rules;

pub use dispatch::ScanDispatcher;
pub use engine::{Finding, ScanEngine, ScanOutcome};
pub use filesystem::FilesystemEngine;
pub use rules::{Rule, RuleSet};
