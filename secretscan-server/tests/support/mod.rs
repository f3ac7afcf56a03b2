use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use async_trait::async_trait;
use secretscan_core::{
    JobRegistry, Result, ScanContext, ScanEngine, ScanError, ScanOutcome,
    api::types::FindRequest,
};
use secretscan_server::{AppState, infra::config::Config};
use tokio::time::{sleep, timeout};

/// Engine that keeps running until its stop flag is latched.
#[derive(Debug, Default)]
pub struct ParkedEngine;

#[async_trait]
impl ScanEngine for ParkedEngine {
    async fn scan(
        &self,
        context: Arc<ScanContext>,
        _request: FindRequest,
    ) -> Result<ScanOutcome> {
        while !context.is_stopped() {
            sleep(Duration::from_millis(5)).await;
        }
        Ok(ScanOutcome::Stopped { findings: vec![] })
    }
}

/// Engine that parks a blocking worker thread until stopped, giving up
/// after thirty seconds so a failing test cannot leak it forever.
#[allow(unused)]
#[derive(Debug, Default, Clone)]
pub struct BlockingEngine {
    pub started: Arc<AtomicBool>,
}

#[async_trait]
impl ScanEngine for BlockingEngine {
    async fn scan(
        &self,
        context: Arc<ScanContext>,
        _request: FindRequest,
    ) -> Result<ScanOutcome> {
        let started = Arc::clone(&self.started);
        tokio::task::spawn_blocking(move || {
            started.store(true, Ordering::Release);
            let deadline = Instant::now() + Duration::from_secs(30);
            while !context.is_stopped() && Instant::now() < deadline {
                std::thread::sleep(Duration::from_millis(10));
            }
            ScanOutcome::Stopped { findings: vec![] }
        })
        .await
        .map_err(|err| ScanError::Internal(format!("blocking worker failed: {err}")))
    }
}

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn test_state(socket_path: &str) -> AppState {
    state_with_engine(socket_path, Arc::new(ParkedEngine))
}

#[allow(unused)]
pub fn state_with_engine(socket_path: &str, engine: Arc<dyn ScanEngine>) -> AppState {
    let config = Config::new(socket_path, "SecretScanner").expect("valid config");
    AppState::with_registry(Arc::new(config), Arc::new(JobRegistry::new()), engine)
}

#[allow(unused)]
pub async fn wait_for_count(state: &AppState, expected: usize) {
    timeout(Duration::from_secs(5), async {
        while state.registry().count() != expected {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap_or_else(|_| {
        panic!(
            "registry count stuck at {} (expected {expected})",
            state.registry().count()
        )
    });
}
