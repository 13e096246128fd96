use clap::Parser;
use std::sync::Arc;
use textmatch::api::create_router;
use textmatch::api::handlers::AppState;
use textmatch::config;
use textmatch::text::Normalizer;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textmatch", about = "TF-IDF relevance matching service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Language model name for the normalization pipeline
    #[arg(short, long, env = "SPACY_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                "textmatch=info"
                    .parse()
                    .expect("valid directive literal"),
            ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    // An unknown model is a capability downgrade, not a startup failure
    let normalizer = match Normalizer::load(&args.model) {
        Ok(normalizer) => normalizer,
        Err(e) => {
            tracing::warn!(
                "Could not load language model: {e}; falling back to blank pipeline"
            );
            Normalizer::blank()
        }
    };
    let blank_pipeline = normalizer.is_blank();

    let state = AppState {
        normalizer: Arc::new(normalizer),
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        model = %args.model,
        blank_pipeline,
        "textmatch ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
