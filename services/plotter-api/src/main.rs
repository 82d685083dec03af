//! Plotter API Server
//!
//! Renders difficulty vote histograms into WebP bar charts over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use clap::Parser;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use plotter_api::handlers;
use plotter_api::state::AppState;

/// Plotter API Server
#[derive(Parser, Debug)]
#[command(name = "plotter-api")]
#[command(about = "Difficulty vote chart rendering service")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0", env = "PLOTTER_LISTEN_ADDR")]
    listen: String,

    /// Listen port
    #[arg(short, long, default_value_t = 8080, env = "PORT")]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "PLOTTER_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// TrueType font for chart labels
    #[arg(long, env = "CHART_FONT_PATH")]
    font_path: Option<PathBuf>,

    /// YAML file overriding the compact and wide chart profiles
    #[arg(long, env = "CHART_PROFILES")]
    profiles: Option<PathBuf>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = match runtime_builder.build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_server(args)) {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(args: Args) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Starting plotter API server");

    let state = AppState::new(args.profiles.as_deref(), args.font_path.as_deref())
        .context("Failed to initialize application state")?
        .with_prometheus(prometheus_handle);
    let state = Arc::new(state);

    let app = Router::new()
        .route("/chart", post(handlers::chart::chart_handler))
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", args.listen, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.listen, args.port))?;

    info!(address = %addr, "Plotter API listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
