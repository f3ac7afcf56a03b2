use std::{fmt, sync::Arc};

use tokio::{runtime::Handle, task::JoinError};
use tracing::{error, info, instrument, warn};

use crate::{
    api::types::FindRequest,
    error::{Result, ScanError},
    jobs::{JobRegistry, ScanContext},
    scan::engine::{ScanEngine, ScanOutcome},
};

/// Accepts start requests, registers a context for each and runs the
/// engine in the background. The context is unregistered as soon as the
/// engine finishes, whatever the outcome.
#[derive(Clone)]
pub struct ScanDispatcher {
    registry: Arc<JobRegistry>,
    engine: Arc<dyn ScanEngine>,
}

impl fmt::Debug for ScanDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanDispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl ScanDispatcher {
    pub fn new(registry: Arc<JobRegistry>, engine: Arc<dyn ScanEngine>) -> Self {
        Self { registry, engine }
    }

    pub fn registry(&self) -> &Arc<JobRegistry> {
        &self.registry
    }

    /// Register and launch a scan. Returns before the scan does any work.
    ///
    /// Fails with [`ScanError::Internal`], registering nothing, when called
    /// outside a tokio runtime.
    #[instrument(skip(self, request), fields(scan_id = %request.scan_id))]
    pub fn start_scan(&self, mut request: FindRequest) -> Result<Arc<ScanContext>> {
        let scan_id = request.scan_id.trim().to_string();
        if scan_id.is_empty() {
            return Err(ScanError::MissingScanId);
        }
        if request.input.is_none() {
            return Err(ScanError::MissingInput(scan_id));
        }
        request.scan_id = scan_id.clone();

        // Nothing may be registered unless the engine can actually be spawned.
        let runtime = Handle::try_current()
            .map_err(|err| ScanError::Internal(format!("no tokio runtime: {err}")))?;

        let context = Arc::new(ScanContext::new(scan_id.clone()));
        self.registry.register(scan_id.clone(), Arc::clone(&context))?;
        info!(
            running_jobs = self.registry.count(),
            input = request.input.as_ref().map(|input| input.kind()),
            "scan registered"
        );

        let engine = Arc::clone(&self.engine);
        let engine_context = Arc::clone(&context);
        let run = runtime.spawn(async move { engine.scan(engine_context, request).await });

        let registry = Arc::clone(&self.registry);
        let tracked = Arc::clone(&context);
        runtime.spawn(async move {
            let outcome = run.await;
            registry.release(&scan_id, &tracked);
            log_outcome(&scan_id, outcome, registry.count());
        });

        Ok(context)
    }
}

fn log_outcome(
    scan_id: &str,
    outcome: std::result::Result<Result<ScanOutcome>, JoinError>,
    running_jobs: usize,
) {
    match outcome {
        Ok(Ok(ScanOutcome::Completed { findings })) => info!(
            scan_id,
            findings = findings.len(),
            running_jobs,
            "scan completed"
        ),
        Ok(Ok(ScanOutcome::Stopped { findings })) => info!(
            scan_id,
            findings = findings.len(),
            running_jobs,
            "scan stopped on request"
        ),
        Ok(Err(err)) => error!(scan_id, error = %err, running_jobs, "scan failed"),
        Err(join_err) if join_err.is_panic() => {
            error!(scan_id, running_jobs, "scan engine panicked")
        }
        Err(join_err) => {
            warn!(scan_id, error = %join_err, running_jobs, "scan task aborted")
        }
    }
}
