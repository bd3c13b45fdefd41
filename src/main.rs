use clap::Parser;

use localfiles::addon::{self, state::AppState};
use localfiles::{cli, config};

/// Wait for the first Ctrl+C (graceful shutdown). A second Ctrl+C while
/// in-flight requests drain force-exits.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nlocalfiles: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    });

    let config = config::Config::resolve(file_config, &args);

    // Catalog ids carry absolute paths.
    let root = std::path::absolute(&config.root).unwrap_or_else(|_| config.root.clone());

    // The library is scanned on the first request, so a missing root is not fatal here.
    if !root.is_dir() {
        tracing::warn!(
            "Library root {} is not a readable directory; requests will fail until it is",
            root.display()
        );
    }

    let state = AppState::new(root, &config.name);
    tracing::info!(
        "localfiles \"{}\" serving {}",
        config.name,
        state.library.root().display()
    );
    let app = addon::build_router(state);

    let host = if config.localhost { "127.0.0.1" } else { "0.0.0.0" };
    let addr = format!("{}:{}", host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });

    let url = format!("http://127.0.0.1:{}/", config.port);
    tracing::info!("Addon running at: {}", url);
    tracing::info!("To install, use: {}manifest.json", url);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Goodbye.");
}
