//! Listener ownership and graceful shutdown.
//!
//! The coordinator owns the Unix socket for the whole process lifetime.
//! Shutdown is driven by a [`CancellationToken`]: OS signals cancel it in
//! production, tests cancel it directly. Registered scans are neither
//! awaited nor stopped when the transport drains.

use std::{
    future::Future,
    io,
    os::unix::{fs::FileTypeExt, net::UnixStream as StdUnixStream},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use axum::Router;
use tokio::{
    net::UnixListener,
    runtime::Runtime,
    signal::{
        self,
        unix::{SignalKind, signal as unix_signal},
    },
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct LifecycleCoordinator {
    listener: UnixListener,
    socket_path: PathBuf,
    shutdown: CancellationToken,
}

impl LifecycleCoordinator {
    /// Bind the plugin socket. A socket file left behind by a dead process
    /// is replaced; a socket with a live listener behind it is an error.
    pub fn bind(socket_path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        Self::bind_with_token(socket_path, CancellationToken::new())
    }

    pub fn bind_with_token(
        socket_path: impl Into<PathBuf>,
        shutdown: CancellationToken,
    ) -> anyhow::Result<Self> {
        let socket_path = socket_path.into();
        clear_stale_socket(&socket_path)?;

        let listener = UnixListener::bind(&socket_path).with_context(|| {
            format!("failed to bind unix socket {}", socket_path.display())
        })?;

        Ok(Self {
            listener,
            socket_path,
            shutdown,
        })
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Cancel the shutdown token on SIGINT or SIGTERM.
    pub fn watch_signals(&self) -> JoinHandle<()> {
        tokio::spawn(shutdown_signal(self.shutdown.clone()))
    }

    /// Serve until the shutdown token fires, then stop accepting, let
    /// in-flight calls finish and remove the socket file.
    pub async fn serve(self, router: Router) -> anyhow::Result<()> {
        let Self {
            listener,
            socket_path,
            shutdown,
        } = self;

        info!(socket_path = %socket_path.display(), "server listening");

        let drain = shutdown.clone();
        let served = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                drain.cancelled().await;
                info!("shutdown requested, draining in-flight requests");
            })
            .await;

        remove_socket_file(&socket_path);
        served.context("rpc server terminated unexpectedly")?;

        info!("exiting gracefully");
        Ok(())
    }
}

/// Drive the process future to completion and tear the runtime down
/// without joining blocking scan workers. Dropping a runtime waits for
/// every `spawn_blocking` task, which would hold the process open until
/// the longest running filesystem walk finished.
pub fn run_to_exit<F>(runtime: Runtime, future: F) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    let result = runtime.block_on(future);
    runtime.shutdown_background();
    result
}

/// Resolve once SIGINT or SIGTERM arrives, or the token is cancelled by
/// someone else, and make sure the token ends up cancelled.
pub async fn shutdown_signal(token: CancellationToken) {
    let interrupt = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = interrupt => info!("received SIGINT"),
        _ = terminate => info!("received SIGTERM"),
        _ = token.cancelled() => return,
    }

    token.cancel();
}

fn clear_stale_socket(path: &Path) -> anyhow::Result<()> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to inspect socket path {}", path.display())
            });
        }
    };

    if !metadata.file_type().is_socket() {
        bail!(
            "socket path {} exists and is not a socket",
            path.display()
        );
    }

    if StdUnixStream::connect(path).is_ok() {
        bail!("socket path {} is already in use", path.display());
    }

    warn!(socket_path = %path.display(), "removing stale socket file");
    std::fs::remove_file(path).with_context(|| {
        format!("failed to remove stale socket {}", path.display())
    })
}

fn remove_socket_file(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            warn!(socket_path = %path.display(), error = %err, "failed to remove socket file")
        }
    }
}
