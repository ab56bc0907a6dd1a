//! Tag/Version entity <-> model mappers

use mclist_core::entities::{Tag, TagLink, Version, VersionLink};
use mclist_core::value_objects::{TagId, VersionId};

use crate::models::{NamedModel, NamedUpsertModel};

impl From<NamedModel> for Tag {
    fn from(model: NamedModel) -> Self {
        Tag {
            id: TagId::new(model.id),
            name: model.name,
        }
    }
}

impl From<NamedModel> for Version {
    fn from(model: NamedModel) -> Self {
        Version {
            id: VersionId::new(model.id),
            name: model.name,
        }
    }
}

impl From<NamedUpsertModel> for TagLink {
    fn from(model: NamedUpsertModel) -> Self {
        let tag = Tag {
            id: TagId::new(model.id),
            name: model.name,
        };
        TagLink::from_upsert(tag, model.inserted)
    }
}

impl From<NamedUpsertModel> for VersionLink {
    fn from(model: NamedUpsertModel) -> Self {
        let version = Version {
            id: VersionId::new(model.id),
            name: model.name,
        };
        VersionLink::from_upsert(version, model.inserted)
    }
}
