//! trustpipe - run one task through the agent pipeline.
//!
//! Executes the Manager -> Developer -> Tester pipeline against an
//! OpenAI-compatible backend, validates the final output for hallucination
//! indicators, and prints the resulting execution record as JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use trustpipe_core::{
    init_tracing, ExecutionSupervisor, OpenAiConfig, OpenAiInvoker, METRICS,
};
use trustpipe_sinks::{NoopAuditSink, NoopMetricSink};

#[derive(Parser)]
#[command(name = "trustpipe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Multi-agent pipeline execution with response trust scoring", long_about = None)]
struct Cli {
    /// Task description for the pipeline
    task: String,

    /// Optional context appended to the task
    #[arg(short, long)]
    context: Option<String>,

    /// Request id for audit correlation (generated when omitted)
    #[arg(long)]
    request_id: Option<String>,

    /// Model identifier (default: OPENAI_MODEL or gpt-4-turbo)
    #[arg(long)]
    model: Option<String>,

    /// Chat-completions endpoint URL (default: OPENAI_API_URL or api.openai.com)
    #[arg(long)]
    api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    init_tracing(cli.json, level);

    let mut config = OpenAiConfig::from_env().context("LLM backend not configured")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let supervisor = ExecutionSupervisor::new(
        Arc::new(OpenAiInvoker::new(config)),
        Arc::new(NoopAuditSink),
        Arc::new(NoopMetricSink),
    );

    let record = supervisor
        .run(&cli.task, cli.context.as_deref(), cli.request_id)
        .await?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    METRICS.flush();
    Ok(())
}
