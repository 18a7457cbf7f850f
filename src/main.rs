//! Web entry point: load the model once, then serve the upload form.

use clap::Parser;
use derma_scan::core::init_tracing;
use derma_scan::predictor::LesionClassifierBuilder;
use derma_scan::server::{router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "derma-scan")]
#[command(about = "Skin-lesion classification web tool")]
struct Args {
    /// Path to the model directory (model.onnx + preprocessor_config.json)
    #[arg(short, long, default_value = "dinov2_skin_disease_model")]
    model_dir: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8490)]
    port: u16,

    /// Number of ONNX sessions to pool for concurrent predictions
    #[arg(long, default_value_t = 1)]
    session_pool_size: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();

    info!("loading model from {}", args.model_dir.display());
    let classifier = LesionClassifierBuilder::new()
        .session_pool_size(args.session_pool_size)
        .build(&args.model_dir)?;
    info!("model '{}' loaded", classifier.model_name());

    let app = router(AppState::new(classifier));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("derma-scan listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
