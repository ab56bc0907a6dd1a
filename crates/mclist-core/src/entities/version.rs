//! Version entity - a Minecraft game version reported by the status API

use crate::value_objects::VersionId;

/// Version entity (unique by name)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub id: VersionId,
    pub name: String,
}

/// Outcome of resolving a version name, see [`crate::TagLink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLink {
    Connect(Version),
    Create(Version),
}

impl VersionLink {
    pub fn from_upsert(version: Version, inserted: bool) -> Self {
        if inserted {
            Self::Create(version)
        } else {
            Self::Connect(version)
        }
    }

    pub fn version(&self) -> &Version {
        match self {
            Self::Connect(version) | Self::Create(version) => version,
        }
    }

    #[inline]
    pub fn id(&self) -> VersionId {
        self.version().id
    }

    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Create(_))
    }
}
