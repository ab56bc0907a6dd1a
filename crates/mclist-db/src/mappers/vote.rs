//! Vote entity <-> model mapper

use mclist_core::entities::Vote;
use mclist_core::value_objects::{ServerId, UserId, VoteId};

use crate::models::VoteModel;

impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            id: VoteId::new(model.id),
            author_id: UserId::new(model.author_id),
            server_id: ServerId::new(model.server_id),
            created_at: model.created_at,
        }
    }
}
