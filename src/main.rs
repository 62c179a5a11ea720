//! policydesk - CLI entry point

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use policydesk::api;
use policydesk::cli::{Args, Commands};
use policydesk::config::{Config, GeneratorTransport};
use policydesk::embedding::{EmbeddingEngine, TextEmbedder};
use policydesk::index::SectionIndex;
use policydesk::ingest::load_policies;
use policydesk::llm::{Generator, OllamaHttp, OllamaProcess};
use policydesk::rag::{Retriever, TicketPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &args);

    let pipeline = Arc::new(build_pipeline(&config)?);

    match args.command {
        Some(Commands::Resolve { ticket }) => {
            let response = pipeline.resolve(&ticket).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Some(Commands::Serve) | None => {
            api::serve(pipeline, &config.server.bind).await?;
        }
    }

    Ok(())
}

/// CLI flags win over config file values
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(docs_dir) = &args.docs_dir {
        config.docs.dir = docs_dir.clone();
    }
    if let Some(model) = &args.model {
        config.ollama.model = model.clone();
    }
    if let Some(host) = &args.host {
        config.ollama.host = host.clone();
    }
    if let Some(port) = args.port {
        config.ollama.port = port;
    }
    if let Some(top_k) = args.top_k {
        config.retrieval.top_k = top_k;
    }
    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
}

/// Load documents, build the index, and wire the pipeline
fn build_pipeline(config: &Config) -> Result<TicketPipeline> {
    let sections = load_policies(&config.docs.dir);
    info!(
        sections = sections.len(),
        dir = %config.docs.dir.display(),
        "Loaded policy sections"
    );

    let embedder: Arc<dyn TextEmbedder> =
        Arc::new(EmbeddingEngine::with_model(&config.embedding.model_id)?);

    let index = Arc::new(SectionIndex::build(sections, embedder.as_ref()));
    if !index.is_populated() {
        warn!("Index is empty; every ticket will get the no-documents fallback");
    }

    let generator: Arc<dyn Generator> = match config.ollama.transport {
        GeneratorTransport::Process => Arc::new(
            OllamaProcess::new(&config.ollama.model)
                .with_timeout(std::time::Duration::from_secs(config.ollama.timeout_secs)),
        ),
        GeneratorTransport::Http => Arc::new(OllamaHttp::new(
            &config.ollama.base_url(),
            &config.ollama.model,
        )?),
    };

    let retriever = Retriever::new(index, embedder);

    Ok(TicketPipeline::new(retriever, generator).with_top_k(config.retrieval.top_k))
}
