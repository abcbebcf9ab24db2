//! Main webserver implementation
//!
//! Wraps any `CompanyResearcher` behind an axum router; the researcher is
//! shared immutably across requests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use research::CompanyResearcher;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{get_status, health_check, run_research, serve_index};

/// Main webserver struct with the researcher injected
pub struct WebServer<R> {
    state: Arc<WebServerState>,
    researcher: Arc<R>,
}

impl<R> Clone for WebServer<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            researcher: Arc::clone(&self.researcher),
        }
    }
}

impl<R> WebServer<R>
where
    R: CompanyResearcher + 'static,
{
    pub fn new(bind_address: SocketAddr, researcher: Arc<R>) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address)),
            researcher,
        }
    }

    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn researcher(&self) -> &R {
        &self.researcher
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(serve_index))
            .route("/api/run", post(run_research::<R>))
            .route("/api/status", get(get_status::<R>))
            .route("/health", get(health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        info!("🌐 Web server listening on http://{}", bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
