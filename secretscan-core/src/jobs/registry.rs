use std::{fmt, sync::Arc};

use dashmap::{DashMap, mapref::entry::Entry};

use crate::error::{Result, ScanError};
use crate::jobs::context::ScanContext;

/// Concurrent mapping from scan identifier to the live scan's context.
///
/// This is the single source of truth for which scans are active. All
/// operations lock at most one shard for the duration of a single map
/// operation, so callers never need external synchronization.
pub struct JobRegistry<C = ScanContext> {
    jobs: DashMap<String, Arc<C>>,
}

impl<C> fmt::Debug for JobRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobRegistry")
            .field("running_jobs", &self.jobs.len())
            .finish()
    }
}

impl<C> JobRegistry<C> {
    pub fn new() -> Self {
        Self {
            jobs: DashMap::new(),
        }
    }

    /// Insert a new entry. Rejects identifiers that are already registered
    /// so a live scan never loses its stop handle.
    pub fn register(&self, scan_id: impl Into<String>, context: Arc<C>) -> Result<()> {
        match self.jobs.entry(scan_id.into()) {
            Entry::Occupied(existing) => {
                Err(ScanError::DuplicateId(existing.key().clone()))
            }
            Entry::Vacant(slot) => {
                slot.insert(context);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, scan_id: &str) -> Option<Arc<C>> {
        self.jobs.get(scan_id).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove the entry if present. Idempotent.
    pub fn unregister(&self, scan_id: &str) -> Option<Arc<C>> {
        self.jobs.remove(scan_id).map(|(_, context)| context)
    }

    /// Remove the entry only if it still refers to `context`.
    pub fn release(&self, scan_id: &str, context: &Arc<C>) -> bool {
        self.jobs
            .remove_if(scan_id, |_, current| Arc::ptr_eq(current, context))
            .is_some()
    }

    /// Best-effort snapshot of the number of registered scans.
    pub fn count(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_registered(&self, scan_id: &str) -> bool {
        self.jobs.contains_key(scan_id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.jobs.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl<C> Default for JobRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
