//! Tag entity and name resolution results

use std::collections::HashSet;

use crate::value_objects::TagId;

/// Tag entity (unique by name)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

/// Outcome of resolving a tag name to a row
///
/// `Connect` means the tag already existed and the listing is linked to it,
/// `Create` means the row was inserted by this resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLink {
    Connect(Tag),
    Create(Tag),
}

impl TagLink {
    /// Build a link from an upsert result
    pub fn from_upsert(tag: Tag, inserted: bool) -> Self {
        if inserted {
            Self::Create(tag)
        } else {
            Self::Connect(tag)
        }
    }

    pub fn tag(&self) -> &Tag {
        match self {
            Self::Connect(tag) | Self::Create(tag) => tag,
        }
    }

    pub fn into_tag(self) -> Tag {
        match self {
            Self::Connect(tag) | Self::Create(tag) => tag,
        }
    }

    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Create(_))
    }
}

/// Trim tag names, drop blanks and keep the first occurrence of each name
pub fn normalize_tag_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(String::from)
        .collect()
}
