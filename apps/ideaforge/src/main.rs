mod catalog;
mod config;
mod errors;
mod generation;
mod llm_client;
mod pipeline;
mod render;
mod responses;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::GenerationClient;
use crate::llm_client::{CompletionBackend, LlmClient};
use crate::pipeline::Orchestrator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ideaforge v{}", env!("CARGO_PKG_VERSION"));

    let backend: Option<Arc<dyn CompletionBackend>> = match &config.api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.model.clone())?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(llm) as Arc<dyn CompletionBackend>)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; every prompt gets a mock response");
            None
        }
    };
    let client = GenerationClient::new(backend, config.retry, config.max_tokens);

    let output_dir = config.output_dir.clone();
    let report = Orchestrator::new(config, client).run().await?;

    info!(
        run_id = %report.run_id,
        catalog = ?report.catalog_source,
        "Done: {} responses ({} placeholders) in {} files, summary at {}, {} pages. Check the '{}' folder.",
        report.results.len(),
        report.placeholder_count(),
        report.response_files.len(),
        report.summary_path.display(),
        report.pages.len(),
        output_dir.display()
    );

    Ok(())
}
