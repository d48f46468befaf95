use anyhow::Result;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Signals that can trigger shutdown.
enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

/// Wait for termination signals (Ctrl+C, SIGTERM).
///
/// # Errors
/// Returns an error if signal handling fails.
pub async fn wait_for_shutdown() -> Result<()> {
    let signal = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    match signal {
        ShutdownSignal::CtrlC => tracing::info!(signal = "ctrl_c", "Shutdown signal received"),
        #[cfg(unix)]
        ShutdownSignal::Sigterm => tracing::info!(signal = "sigterm", "Shutdown signal received"),
    }
    Ok(())
}

/// Spawn a task that cancels `token` once a termination signal arrives.
///
/// If the primary waiter fails, falls back to plain `ctrl_c()`.
#[must_use]
pub fn cancel_on_shutdown(token: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = wait_for_shutdown().await {
            tracing::warn!(error = %e, "shutdown: signal waiter failed, falling back to ctrl_c()");
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!(error = %e, "shutdown: ctrl_c fallback failed");
            }
        }
        token.cancel();
    })
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c().await.map_err(|e| {
        tracing::error!(%e, "Error handling Ctrl+C signal");
        e
    })?;
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut signal_handler =
        signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(|e| {
            tracing::error!(%e, "Failed to install SIGTERM handler");
            e
        })?;
    signal_handler.recv().await;
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}
