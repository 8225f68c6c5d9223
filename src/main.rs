use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use learning_center::adapters::http::{build_app_router, ProfileHandlers, PublishingHandlers};
use learning_center::adapters::{memory, postgres};
use learning_center::config::{AppConfig, DatabaseConfig, ServerConfig};
use learning_center::ports::{CategoryRepository, ProfileRepository, TutorialRepository};

/// Repository set behind the HTTP handlers.
struct Repositories {
    profiles: Arc<dyn ProfileRepository>,
    categories: Arc<dyn CategoryRepository>,
    tutorials: Arc<dyn TutorialRepository>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // --- Configuration ---
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // --- Tracing ---
    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server terminated");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repositories = build_repositories(&config.database).await?;

    let app = build_app_router(
        ProfileHandlers::new(repositories.profiles),
        PublishingHandlers::new(repositories.categories, repositories.tutorials),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Learning Center listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn build_repositories(
    database: &DatabaseConfig,
) -> Result<Repositories, Box<dyn std::error::Error>> {
    if database.is_memory() {
        info!("Using in-memory storage");
        return Ok(Repositories {
            profiles: Arc::new(memory::InMemoryProfileRepository::new()),
            categories: Arc::new(memory::InMemoryCategoryRepository::new()),
            tutorials: Arc::new(memory::InMemoryTutorialRepository::new()),
        });
    }

    let pool = postgres::connect(database).await?;
    if database.run_migrations {
        postgres::run_migrations(&pool).await?;
    }

    Ok(Repositories {
        profiles: Arc::new(postgres::PostgresProfileRepository::new(pool.clone())),
        categories: Arc::new(postgres::PostgresCategoryRepository::new(pool.clone())),
        tutorials: Arc::new(postgres::PostgresTutorialRepository::new(pool)),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
