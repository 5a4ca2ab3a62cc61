use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use amygdala::{api, AppState, BundledModel, Classifier, Directory, ModelManager};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory holding the artifact cache (defaults to the platform
    /// cache dir, overridable via AMYGDALA_CACHE)
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Load the ONNX graph from this exact path instead of the managed
    /// cache (requires --tokenizer-path)
    #[arg(long, requires = "tokenizer_path")]
    model_path: Option<PathBuf>,

    /// Load the tokenizer from this exact path instead of the managed
    /// cache (requires --model-path)
    #[arg(long, requires = "model_path")]
    tokenizer_path: Option<PathBuf>,

    /// Force a fresh download of the bundled artifacts
    #[arg(short, long)]
    fresh: bool,
}

async fn build_classifier(args: &Args) -> anyhow::Result<Classifier> {
    if let (Some(model_path), Some(tokenizer_path)) = (&args.model_path, &args.tokenizer_path) {
        info!(
            "loading artifacts from {} and {}",
            model_path.display(),
            tokenizer_path.display()
        );
        return Classifier::builder()
            .with_artifacts(model_path, tokenizer_path, None)?
            .build()
            .context("failed to build classifier from explicit artifact paths");
    }

    let manager = match &args.model_dir {
        Some(dir) => ModelManager::new(dir)?,
        None => ModelManager::new_default()?,
    };
    let model = BundledModel::MentalMiniLM;

    if args.fresh {
        info!("fresh download requested, removing any existing artifacts");
        manager.remove_download(model)?;
    }
    manager.ensure_downloaded(model).await?;

    Classifier::builder()
        .with_model(&manager, model)?
        .build()
        .context("failed to build classifier from the managed cache")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    amygdala::init_logger();
    let args = Args::parse();

    // The process must not come up without a working classifier.
    let classifier = build_classifier(&args).await?;
    let classifier_info = classifier.info();
    info!(
        "classifier ready: {} labels, model at {}",
        classifier_info.num_labels, classifier_info.model_path
    );

    let directory = Directory::builtin();
    info!("therapist directory loaded: {} records", directory.len());

    let state = AppState::new(classifier, directory);
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on {}", addr);

    axum::serve(listener, api::router(state)).await?;
    Ok(())
}
