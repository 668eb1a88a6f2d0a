use std::error::Error;

use anyhow::anyhow;
use anyhow::Context;
use tokio::task::JoinHandle;

/// Wait until the first server task stops and report why.
///
/// Both servers run for the lifetime of the process, so any exit ends it.
/// A server error (e.g. the listener failed to bind) is returned instead of
/// being left inside the finished task.
pub async fn run_until_exit<H, G>(
    http_server: JoinHandle<Result<(), H>>,
    grpc_server: JoinHandle<Result<(), G>>,
) -> Result<(), anyhow::Error>
where
    H: Error + Send + Sync + 'static,
    G: Error + Send + Sync + 'static,
{
    tokio::select! {
        result = http_server => server_exit("http", result),
        result = grpc_server => server_exit("grpc", result),
    }
}

fn server_exit<E>(
    protocol: &'static str,
    result: Result<Result<(), E>, tokio::task::JoinError>,
) -> Result<(), anyhow::Error>
where
    E: Error + Send + Sync + 'static,
{
    match result {
        Ok(Ok(())) => {
            tracing::warn!(protocol, "Server stopped");
            Err(anyhow!("{} server stopped unexpectedly", protocol))
        }
        Ok(Err(e)) => {
            tracing::error!(protocol, error = %e, "Server error");
            Err(e).with_context(|| format!("{} server failed", protocol))
        }
        Err(e) => {
            tracing::error!(protocol, error = %e, "Server task panicked");
            Err(e).with_context(|| format!("{} server task failed", protocol))
        }
    }
}
