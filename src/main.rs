// ABOUTME: Entry point for the stevedore API server.
// ABOUTME: Parses arguments, loads configuration, and serves the API.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use std::sync::Arc;
use stevedore::config::{self, Config};
use stevedore::engine::{ContainerRepository, DockerRepository};
use stevedore::error::{Error, Result};
use stevedore::service::LifecycleService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)
        }
        Commands::Serve {
            host,
            port,
            socket,
            config,
        } => {
            let mut settings = match config {
                Some(path) => {
                    if !path.exists() {
                        return Err(Error::ConfigNotFound(path));
                    }
                    Config::load(&path)?
                }
                None => Config::discover(&env::current_dir()?)?,
            };

            // Flags and env vars override file values
            if let Some(host) = host {
                settings.listen.host = host;
            }
            if let Some(port) = port {
                settings.listen.port = port;
            }
            if let Some(socket) = socket {
                settings.engine.socket = Some(socket);
            }

            serve(settings).await
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    // The engine handle is created exactly once, here; a failure leaves the
    // service answering with 503s until the process is restarted.
    let repository = DockerRepository::connect(&config.engine);
    if !repository.is_available().await {
        tracing::warn!("container engine is not reachable");
    }

    let service = Arc::new(LifecycleService::new(repository));
    let app = stevedore::api::router(service);

    let addr = format!("{}:{}", config.listen.host, config.listen.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
}
