//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in mclist-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod server;
mod tag;
mod user;
mod version;
mod vote;

pub use server::PgServerRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
pub use version::PgVersionRepository;
pub use vote::PgVoteRepository;
