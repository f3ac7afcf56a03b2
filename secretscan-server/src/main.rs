//! # SecretScan plugin
//!
//! Long-lived plugin process that serves scan control RPCs on a local
//! Unix socket:
//!
//! - **Identity**: plugin name and a per-socket UID
//! - **Status**: number of scans currently running
//! - **Start**: register a scan and hand it to the scan engine in the background
//! - **Stop**: latch a running scan's cooperative stop flag
//!
//! SIGINT and SIGTERM drain in-flight RPCs and exit. Running scans are not
//! awaited.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use secretscan_core::{
    FilesystemEngine, ScanEngine, scan::filesystem::DEFAULT_MAX_FILE_SIZE,
};
use secretscan_server::{
    AppState,
    infra::{
        config::{Config, DEFAULT_PLUGIN_NAME},
        lifecycle::{LifecycleCoordinator, run_to_exit},
    },
    routes::create_rpc_router,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "secretscan-server")]
#[command(about = "Secret scanning plugin serving control RPCs on a Unix socket")]
struct Cli {
    /// Unix socket path to listen on
    #[arg(long, env = "SECRETSCAN_SOCKET_PATH")]
    socket_path: PathBuf,

    /// Plugin name reported by GetName and embedded in the UID
    #[arg(long, env = "SECRETSCAN_PLUGIN_NAME", default_value = DEFAULT_PLUGIN_NAME)]
    plugin_name: String,

    /// Skip files larger than this many bytes
    #[arg(long, env = "SECRETSCAN_MAX_FILE_SIZE", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    max_file_size: u64,

    /// Tracing filter directives, e.g. `info,secretscan::finding=warn`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&cli.log_filter)
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let config = Config::builder(cli.socket_path, cli.plugin_name)
        .max_file_size(cli.max_file_size)
        .build()
        .context("invalid configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    run_to_exit(runtime, run(Arc::new(config)))
}

async fn run(config: Arc<Config>) -> anyhow::Result<()> {
    let engine: Arc<dyn ScanEngine> = Arc::new(
        FilesystemEngine::with_builtin_rules(config.max_file_size)
            .context("failed to build scan engine")?,
    );

    info!(
        plugin_name = %config.plugin_name,
        uid = %config.uid(),
        max_file_size = config.max_file_size,
        "configuration in effect"
    );

    let coordinator = LifecycleCoordinator::bind(config.socket_path())?;
    let _signals = coordinator.watch_signals();

    let state = AppState::new(Arc::clone(&config), engine);
    coordinator.serve(create_rpc_router(state)).await
}
