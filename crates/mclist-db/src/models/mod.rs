//! Database models - SQLx-compatible structs for PostgreSQL tables

mod named;
mod server;
mod user;
mod vote;

pub use named::{NamedModel, NamedUpsertModel};
pub use server::ServerModel;
pub use user::UserModel;
pub use vote::VoteModel;
