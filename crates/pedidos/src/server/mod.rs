//! # HTTP Surface
//!
//! An axum [`Router`] over a shared [`PedidosApi`]. Handlers are adapters only:
//! extract the request, run the facade call on the blocking pool, shape the JSON
//! answer. Status mapping lives in [`error::ApiError`].
//!
//! Files are served by [`ServeDir`]: stored receipts under `/uploads`, and the
//! static front end for every path the API does not claim.

mod error;
mod handlers;
mod request_tracing;


use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, put};
use axum::Router;
use pedidosapp::api::PedidosApi;
use pedidosapp::config::PedidosConfig;
use pedidosapp::store::fs::FileStore;
use pedidosapp::uploads::PUBLIC_PREFIX;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<PedidosApi<FileStore>>,
}

/// Settings of the HTTP surface that are not application state.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub public_dir: PathBuf,
    /// `0` lifts the limit.
    pub max_upload_bytes: usize,
}

impl HttpOptions {
    pub fn from_config(config: &PedidosConfig) -> Self {
        Self {
            public_dir: config.public_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    fn body_limit(&self) -> DefaultBodyLimit {
        match self.max_upload_bytes {
            0 => DefaultBodyLimit::disable(),
            max => DefaultBodyLimit::max(max),
        }
    }
}

pub fn build_app(state: AppState, options: &HttpOptions) -> Router {
    let uploads = ServeDir::new(state.api.uploads().dir());

    Router::new()
        .route(
            "/api/pedidos",
            get(handlers::list_pedidos).post(handlers::create_pedido),
        )
        .route(
            "/api/pedidos/:id",
            put(handlers::update_pedido).delete(handlers::delete_pedido),
        )
        .nest_service(PUBLIC_PREFIX, uploads)
        .fallback_service(ServeDir::new(&options.public_dir))
        .layer(options.body_limit())
        .layer(middleware::from_fn(request_tracing::request_tracing_middleware))
        .with_state(state)
}

pub async fn serve(bind: &str, state: AppState, options: HttpOptions) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    let addr = listener.local_addr()?;
    if !options.public_dir.is_dir() {
        warn!(dir = %options.public_dir.display(), "public dir missing, only the API is served");
    }
    info!(%addr, "Servidor listo en http://{}", addr);

    axum::serve(listener, build_app(state, &options))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("server failed")?;

    info!("server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable, waiting for ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
