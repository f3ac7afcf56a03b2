use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::Serialize;

use crate::{api::types::FindRequest, error::Result, jobs::ScanContext};

/// A single rule hit. The matched text itself is never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule_id: &'static str,
    pub path: PathBuf,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Completed { findings: Vec<Finding> },
    /// The engine observed the stop flag before finishing.
    Stopped { findings: Vec<Finding> },
}

impl ScanOutcome {
    pub fn findings(&self) -> &[Finding] {
        match self {
            ScanOutcome::Completed { findings }
            | ScanOutcome::Stopped { findings } => findings,
        }
    }
}

/// Executes one scan. Implementations are expected to poll
/// [`ScanContext::is_stopped`] at their own safe checkpoints and return
/// [`ScanOutcome::Stopped`] once they see it.
#[async_trait]
pub trait ScanEngine: Send + Sync + 'static {
    async fn scan(
        &self,
        context: Arc<ScanContext>,
        request: FindRequest,
    ) -> Result<ScanOutcome>;
}
