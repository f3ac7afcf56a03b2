use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};

/// Per-scan record shared between the job registry and the engine
/// executing the scan.
#[derive(Debug)]
pub struct ScanContext {
    scan_id: String,
    /// One-way latch. Only ever transitions false -> true.
    stopped: AtomicBool,
    started_at: DateTime<Utc>,
}

impl ScanContext {
    pub fn new(scan_id: impl Into<String>) -> Self {
        Self {
            scan_id: scan_id.into(),
            stopped: AtomicBool::new(false),
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.scan_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Latch the stop flag. Returns `true` only for the call that flipped it.
    pub fn request_stop(&self) -> bool {
        !self.stopped.swap(true, Ordering::AcqRel)
    }

    /// Engines poll this at their own checkpoints.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn new_context_is_running() {
        let ctx = ScanContext::new("scan-a");
        assert_eq!(ctx.id(), "scan-a");
        assert!(!ctx.is_stopped());
        assert!(ctx.started_at() <= Utc::now());
    }

    #[test]
    fn stop_is_a_one_way_latch() {
        let ctx = ScanContext::new("scan-a");

        assert!(ctx.request_stop());
        assert!(ctx.is_stopped());

        assert!(!ctx.request_stop(), "second stop must be a no-op");
        assert!(ctx.is_stopped());
    }

    #[test]
    fn exactly_one_concurrent_stop_wins() {
        let ctx = Arc::new(ScanContext::new("scan-a"));

        let winners: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let ctx = Arc::clone(&ctx);
                    scope.spawn(move || ctx.request_stop())
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|flipped| *flipped)
                .count()
        });

        assert_eq!(winners, 1);
        assert!(ctx.is_stopped());
    }
}
