//! Core library for the SecretScan plugin: the scan job registry, the
//! cooperative stop protocol and the dispatcher that hands start requests
//! to a scan engine.

pub mod api;
pub mod error;
pub mod jobs;
pub mod scan;

pub use error::{Result, ScanError};
pub use jobs::{JobRegistry, ScanContext};
pub use scan::{FilesystemEngine, ScanDispatcher, ScanEngine, ScanOutcome};
