//! Research CLI entry point

use clap::Parser;

use shared::ProviderId;
use shared::logging::{Component, init_tracing, log_error, log_startup};
use research::{HttpOrchestrator, ResearchConfig, ResearchResult};

#[derive(Parser)]
#[command(name = "research")]
#[command(about = "Profile a company and suggest AI/ML/GenAI use cases")]
struct Args {
    /// Company name to research
    #[arg(long)]
    company: String,

    /// Language-model provider (openai, groq)
    #[arg(long)]
    provider: Option<ProviderId>,

    /// Model name, overriding the provider default
    #[arg(long)]
    model: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the full run report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ResearchResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    init_tracing(Component::Research, args.log_level.as_deref());

    let config = ResearchConfig::from_env(args.provider, args.model).inspect_err(|e| {
        log_error(Component::Research, "configuration", e);
    })?;
    log_startup(
        Component::Research,
        &format!("provider={} model={}", config.model.provider.provider, config.model.provider.model),
    );

    let orchestrator = HttpOrchestrator::from_config(&config)?;
    let report = orchestrator.run(&args.company).await;

    if args.json {
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    let profile = &report.profile;
    println!("# {}", profile.name);
    println!();
    println!("Industry: {}", profile.industry);
    println!();
    println!("{}", profile.description);
    println!();
    println!("Offerings:");
    for offering in &profile.offerings {
        println!("- {offering}");
    }
    println!();
    println!("Focus areas:");
    for focus in &profile.focus_areas {
        println!("- {focus}");
    }
    println!();
    println!("## AI use cases");
    println!();
    println!("{}", report.use_cases.to_markdown());

    if !report.diagnostics.is_empty() {
        eprintln!();
        eprintln!("{} step(s) fell back:", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            eprintln!("  {diagnostic}");
        }
    }

    Ok(())
}
