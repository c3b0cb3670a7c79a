use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cvlens::{AnalysisPipeline, Document, LlmConfig, OpenAiClient, QueryEngine};

/// Analyze CV documents and answer questions over the extracted data.
#[derive(Parser)]
#[command(name = "cvlens", version, about)]
struct Cli {
    /// CV documents to analyze (PDF or DOCX)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Question to answer over the analyzed batch (repeatable)
    #[arg(long)]
    ask: Vec<String>,

    /// Completion-service model name
    #[arg(long)]
    model: Option<String>,

    /// Completion-service base URL (for OpenAI-compatible endpoints)
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cvlens=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = LlmConfig::from_env();
    if let Some(model) = &cli.model {
        config = config.with_model(model);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }

    let client = OpenAiClient::new(&config)?;

    let mut documents = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let doc = Document::from_path(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        documents.push(doc);
    }

    let pipeline = AnalysisPipeline::new(&client);
    let report = pipeline.run(&documents);
    println!("{}", serde_json::to_string_pretty(&report)?);

    let query_engine = QueryEngine::new(&client);
    for question in &cli.ask {
        println!("\n> {question}");
        match query_engine.answer(&report, question) {
            Ok(answer) => println!("{answer}"),
            Err(e) => eprintln!("query failed: {e}"),
        }
    }

    Ok(())
}
