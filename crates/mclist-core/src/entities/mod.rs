//! Domain entities - core business objects

mod server;
mod tag;
mod user;
mod version;
mod vote;

pub use server::{NewServer, Server, ServerChanges};
pub use tag::{normalize_tag_names, Tag, TagLink};
pub use user::{User, UserProfile};
pub use version::{Version, VersionLink};
pub use vote::Vote;
