//! # mclist-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `mclist-core`. It handles:
//!
//! - Connection pool management
//! - Schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mclist_db::{create_pool, run_migrations, PgServerRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/mclist")).await?;
//!     run_migrations(&pool).await?;
//!     let servers = PgServerRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{run_migrations, MIGRATIONS_DIR};
pub use pool::{create_pool, ping, PgPool, PoolConfig};
pub use repositories::{
    PgServerRepository, PgTagRepository, PgUserRepository, PgVersionRepository, PgVoteRepository,
};
