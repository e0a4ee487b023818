use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use textsim::{CompareTextsUseCase, EmbeddingService, MockEmbedding, OpenAiEmbedding};

#[derive(Parser)]
#[command(name = "textsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First input string
    #[arg(long)]
    text1: String,

    /// Second input string
    #[arg(long)]
    text2: String,

    #[arg(short, long)]
    verbose: bool,

    /// Use the deterministic mock embedding service (no network, no API key)
    #[arg(long)]
    mock_embeddings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dotenvy::dotenv().ok();

    let embedding_service: Arc<dyn EmbeddingService> = if cli.mock_embeddings {
        info!("Using mock embedding service");
        Arc::new(MockEmbedding::new())
    } else {
        Arc::new(OpenAiEmbedding::from_env()?)
    };

    let use_case = CompareTextsUseCase::new(embedding_service);
    let similarity = use_case.execute(&cli.text1, &cli.text2).await?;

    println!("Cosine similarity between the two inputs: {:.4}", similarity);

    Ok(())
}
