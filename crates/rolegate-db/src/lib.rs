//! # Rolegate DB
//!
//! Persistence for users and roles.
//!
//! The rest of the application talks to storage only through the
//! [`Directory`] trait. [`PgDirectory`] is the PostgreSQL implementation used
//! by the server; `MemoryDirectory` (feature `test-utils`) keeps everything in
//! process for tests.

pub mod directory;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;

use rolegate_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use directory::Directory;
pub use error::DirectoryError;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryDirectory;
pub use postgres::PgDirectory;
pub use sqlx::PgPool;

/// Opens the PostgreSQL connection pool.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database pool initialized"
    );
    Ok(pool)
}
