//! Snipbox - server-rendered snippet pastebin.
//!
//! Binds the HTTP listener after building everything that can fail:
//! configuration, the SQLite pool, and the template cache. Any failure
//! before the listener is up aborts the process.

use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use snipbox_store::SnippetStore;
use snipbox_web::{AppState, Config, TemplateCache, router};

/// Snipbox - create and share short text snippets.
#[derive(Parser, Debug)]
#[command(name = "snipbox-web")]
#[command(about = "Server-rendered snippet pastebin", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    // Open the store and compile the template cache; both are
    // startup-fatal on error.
    let store = SnippetStore::connect(&config.database_url).await?;
    let templates = TemplateCache::build(&config.ui_dir)?;

    // Create application state
    let state = AppState::new(config, store, templates);

    // Build router with request tracing; the span carries method, path,
    // and query so errors logged inside handlers correlate to requests.
    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                query = request.uri().query().unwrap_or("")
            )
        },
    ));

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
