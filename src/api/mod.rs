//! HTTP API module for the greeting and health endpoints.

pub mod handlers;
pub mod routes;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

pub use handlers::AppState;
pub use routes::create_router;

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// Logs the bound address once before accepting. Each connection is handled
/// on its own task, so requests are served concurrently. In-flight requests
/// finish before this returns.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> crate::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Starting pipeline-greeter on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
