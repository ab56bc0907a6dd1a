//! Mutation root, merged from one object per area

mod auth;
mod server;
mod user;
mod vote;

use async_graphql::MergedObject;

pub use auth::AuthMutation;
pub use server::ServerMutation;
pub use user::UserMutation;
pub use vote::VoteMutation;

#[derive(Default, MergedObject)]
pub struct Mutation(AuthMutation, UserMutation, ServerMutation, VoteMutation);
