//! Entity to model mappers
//!
//! This module provides conversions between domain entities (mclist-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod named;
mod server;
mod user;
mod vote;

pub use server::{ServerInsert, ServerUpdate};
