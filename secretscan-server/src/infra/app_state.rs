use std::{fmt, sync::Arc};

use secretscan_core::{JobRegistry, ScanDispatcher, ScanEngine};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Arc<ScanDispatcher>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("plugin_name", &self.config.plugin_name)
            .field("running_jobs", &self.dispatcher.registry().count())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build state around a fresh, empty job registry.
    pub fn new(config: Arc<Config>, engine: Arc<dyn ScanEngine>) -> Self {
        Self::with_registry(config, Arc::new(JobRegistry::new()), engine)
    }

    pub fn with_registry(
        config: Arc<Config>,
        registry: Arc<JobRegistry>,
        engine: Arc<dyn ScanEngine>,
    ) -> Self {
        Self {
            config,
            dispatcher: Arc::new(ScanDispatcher::new(registry, engine)),
        }
    }

    pub fn registry(&self) -> &JobRegistry {
        self.dispatcher.registry()
    }
}
