//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresProfileRepository` - Profiles
//! - `PostgresCategoryRepository` - Categories
//! - `PostgresTutorialRepository` - Tutorials and their assets
//!
//! Every storage failure surfaces as a `DomainError` with code
//! `DatabaseError`.

mod category_repository;
mod profile_repository;
mod tutorial_repository;

pub use category_repository::PostgresCategoryRepository;
pub use profile_repository::PostgresProfileRepository;
pub use tutorial_repository::PostgresTutorialRepository;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, Row};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Opens a connection pool sized and timed from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(db_error("Failed to connect to database"))?;

    info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to run migrations: {}", e),
            )
        })?;
    info!("Database migrations applied");
    Ok(())
}

fn db_error<E: std::fmt::Display>(context: &'static str) -> impl Fn(E) -> DomainError {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}
