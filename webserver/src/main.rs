//! WebServer entry point

use std::net::SocketAddr;
use std::sync::Arc;
use clap::Parser;
use tokio::signal;

use research::{CompanyResearcher, HttpOrchestrator, ResearchConfig};
use shared::ProviderId;
use shared::logging::{self, Component};
use webserver::{WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP front end for company research")]
struct Args {
    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Language-model provider (openai, groq)
    #[arg(long)]
    provider: Option<ProviderId>,

    /// Model name, overriding the provider default
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing(Component::WebServer, args.log_level.as_deref());

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address: {e}")))?;

    let config = ResearchConfig::from_env(args.provider, args.model).inspect_err(|e| {
        logging::log_error(Component::WebServer, "Research configuration", e);
    })?;
    let orchestrator = Arc::new(HttpOrchestrator::from_config(&config)?);

    let provider = orchestrator.provider_config();
    logging::log_startup(
        Component::WebServer,
        &format!("on http://{http_addr} (provider={} model={})", provider.provider, provider.model),
    );

    let webserver = WebServer::new(http_addr, orchestrator);
    webserver.run(shutdown_signal()).await?;

    logging::log_success(Component::WebServer, "WebServer stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C signal, shutting down"),
        Err(err) => {
            // without a signal handler the server runs until killed
            logging::log_error(Component::WebServer, "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
