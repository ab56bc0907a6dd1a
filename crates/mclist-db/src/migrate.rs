//! Schema migrations
//!
//! SQL files live in `migrations/` next to this crate's manifest and are
//! applied in filename order by sqlx's runtime migrator.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Directory holding the SQL migrations
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply every pending migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(Path::new(MIGRATIONS_DIR)).await?;
    info!(count = migrator.iter().count(), "Applying database migrations");
    migrator.run(pool).await
}
