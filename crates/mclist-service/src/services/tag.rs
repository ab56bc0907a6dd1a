//! Tag and version resolution
//!
//! Turns user-supplied names into rows, creating the ones that do not exist.

use futures::future::try_join_all;
use mclist_core::entities::{normalize_tag_names, Tag, TagLink, VersionLink};
use mclist_core::value_objects::TagId;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Resolved tag names, split by whether the row already existed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTags {
    pub connect: Vec<Tag>,
    pub create: Vec<Tag>,
}

impl ResolvedTags {
    /// Partition links, keeping their relative order
    pub fn from_links(links: Vec<TagLink>) -> Self {
        let mut resolved = Self::default();
        for link in links {
            match link {
                TagLink::Connect(tag) => resolved.connect.push(tag),
                TagLink::Create(tag) => resolved.create.push(tag),
            }
        }
        resolved
    }

    /// Ids of every resolved tag, existing ones first
    pub fn ids(&self) -> Vec<TagId> {
        self.connect
            .iter()
            .chain(&self.create)
            .map(|tag| tag.id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.connect.is_empty() && self.create.is_empty()
    }

    pub fn len(&self) -> usize {
        self.connect.len() + self.create.len()
    }
}

/// Tag and version resolution service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve tag names concurrently. Names are trimmed, blanks dropped and
    /// duplicates resolved once.
    #[instrument(skip(self, names), fields(count = names.len()))]
    pub async fn resolve_tags<S: AsRef<str>>(&self, names: &[S]) -> ServiceResult<ResolvedTags> {
        let names = normalize_tag_names(names);
        let repo = self.ctx.tag_repo();

        let links = try_join_all(names.iter().map(|name| repo.upsert_by_name(name))).await?;
        let resolved = ResolvedTags::from_links(links);

        debug!(
            connected = resolved.connect.len(),
            created = resolved.create.len(),
            "Resolved tags"
        );

        Ok(resolved)
    }

    /// Resolve a version name reported by the status API
    #[instrument(skip(self))]
    pub async fn resolve_version(&self, name: &str) -> ServiceResult<VersionLink> {
        let link = self.ctx.version_repo().upsert_by_name(name.trim()).await?;
        debug!(version = %link.version().name, created = link.is_created(), "Resolved version");
        Ok(link)
    }
}
