//! Liveness tracking and cooperative cancellation for running scans.

pub mod context;
pub mod registry;

pub use context::ScanContext;
pub use registry::JobRegistry;
