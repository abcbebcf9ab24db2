//! REST API handlers
//!
//! `POST /api/run` executes one research run; `GET /api/status` reports the
//! configured model and server counters.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use research::CompanyResearcher;
use shared::RunReport;
use crate::webserver_impl::WebServer;

#[derive(Debug, Serialize, Deserialize)]
pub struct RunRequest {
    pub company: String,
}

/// Error body shared by all API endpoints
pub fn error_body(message: impl Into<String>) -> Json<Value> {
    Json(json!({
        "status": "error",
        "message": message.into(),
    }))
}

/// Research endpoint - /api/run
pub async fn run_research<R>(
    State(webserver): State<WebServer<R>>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunReport>, (StatusCode, Json<Value>)>
where
    R: CompanyResearcher + 'static,
{
    let company = request.company.trim();
    if company.is_empty() {
        warn!("rejected research request with blank company name");
        return Err((StatusCode::BAD_REQUEST, error_body("company name must not be empty")));
    }

    let report = webserver.researcher().run(company).await;
    let total = webserver.state().record_run();

    info!(
        run_id = %report.run_id,
        company = %report.company,
        diagnostics = report.diagnostics.len(),
        runs_completed = total,
        "research run served"
    );

    Ok(Json(report))
}

/// Get system status - /api/status
pub async fn get_status<R>(State(webserver): State<WebServer<R>>) -> Json<Value>
where
    R: CompanyResearcher + 'static,
{
    let provider = webserver.researcher().provider_config();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": provider.provider,
        "model": provider.model,
        "uptime_seconds": webserver.state().get_uptime_seconds(),
        "runs_completed": webserver.state().get_runs_completed(),
    }))
}

/// Liveness probe - /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
