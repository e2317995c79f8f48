//! HTTP transport for the QR code generator.

pub mod handlers;
pub mod router;

use std::future::Future;

use tokio::net::TcpListener;

use crate::context::ServiceContext;
use crate::error::AppError;

/// Bind `0.0.0.0:{port}` and serve until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn start_server(port: u16, ctx: ServiceContext) -> Result<(), AppError> {
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("failed to bind {addr}: {e}")))?;
    tracing::info!(port, "starting server");

    serve(listener, ctx, shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Serve the router on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while running.
pub async fn serve(
    listener: TcpListener,
    ctx: ServiceContext,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    let app = router::create_router(ctx);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutting down server");
}
