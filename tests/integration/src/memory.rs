//! In-memory repositories
//!
//! One shared store implements every repository port so the schema can run
//! without PostgreSQL. Semantics follow the SQL implementations: unknown
//! listings fail with `ServerNotFound`, names upsert, and a vote is refused
//! when the author already voted for the listing in the same calendar month.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mclist_core::entities::{
    NewServer, Server, ServerChanges, Tag, TagLink, User, UserProfile, Version, VersionLink, Vote,
};
use mclist_core::traits::{
    RepoResult, ServerRepository, TagRepository, UserRepository, VersionRepository,
    VoteRepository,
};
use mclist_core::value_objects::{
    MonthWindow, Role, ServerId, TagId, UserId, VersionId, VoteId,
};
use mclist_core::DomainError;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct State {
    users: HashMap<UserId, User>,
    servers: BTreeMap<ServerId, Server>,
    server_tags: BTreeSet<(ServerId, TagId)>,
    tags: Vec<Tag>,
    versions: Vec<Version>,
    votes: Vec<Vote>,
    last_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn server_mut(&mut self, id: ServerId) -> RepoResult<&mut Server> {
        self.servers
            .get_mut(&id)
            .ok_or(DomainError::ServerNotFound(id))
    }

    fn ensure_server(&self, id: ServerId) -> RepoResult<()> {
        if self.servers.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::ServerNotFound(id))
        }
    }

    fn user_mut(&mut self, id: UserId) -> RepoResult<&mut User> {
        self.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))
    }
}

/// Shared in-memory store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stored_user(&self, id: UserId) -> Option<User> {
        self.state.lock().await.users.get(&id).cloned()
    }

    pub async fn stored_server(&self, id: ServerId) -> Option<Server> {
        self.state.lock().await.servers.get(&id).cloned()
    }

    /// Insert or replace a user row
    pub async fn put_user(&self, user: User) {
        self.state.lock().await.users.insert(user.id, user);
    }

    pub async fn set_role(&self, id: UserId, role: Role) {
        if let Some(user) = self.state.lock().await.users.get_mut(&id) {
            user.set_role(role);
        }
    }

    pub async fn set_banned(&self, id: UserId, banned: bool) {
        if let Some(user) = self.state.lock().await.users.get_mut(&id) {
            user.set_banned(banned);
        }
    }

    /// Names of every tag row, in insertion order
    pub async fn all_tag_names(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state.tags.iter().map(|tag| tag.name.clone()).collect()
    }

    pub async fn all_version_names(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state.versions.iter().map(|version| version.name.clone()).collect()
    }

    pub async fn votes_for(&self, id: ServerId) -> usize {
        let state = self.state.lock().await;
        state.votes.iter().filter(|vote| vote.server_id == id).count()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.stored_user(id).await)
    }

    async fn upsert_from_profile(&self, profile: &UserProfile) -> RepoResult<User> {
        let mut state = self.state.lock().await;
        let user = state
            .users
            .entry(profile.id)
            .and_modify(|user| user.apply_profile(profile.clone()))
            .or_insert_with(|| User::from_profile(profile.clone()));
        Ok(user.clone())
    }

    async fn update_role(&self, id: UserId, role: Role) -> RepoResult<User> {
        let mut state = self.state.lock().await;
        let user = state.user_mut(id)?;
        user.set_role(role);
        Ok(user.clone())
    }

    async fn update_banned(&self, id: UserId, banned: bool) -> RepoResult<User> {
        let mut state = self.state.lock().await;
        let user = state.user_mut(id)?;
        user.set_banned(banned);
        Ok(user.clone())
    }
}

#[async_trait]
impl ServerRepository for MemoryStore {
    async fn find_by_id(&self, id: ServerId) -> RepoResult<Option<Server>> {
        Ok(self.stored_server(id).await)
    }

    async fn create(&self, server: &NewServer, tag_ids: &[TagId]) -> RepoResult<Server> {
        let mut state = self.state.lock().await;
        if !state.users.contains_key(&server.author_id) {
            return Err(DomainError::UserNotFound(server.author_id));
        }

        let now = Utc::now();
        let id = ServerId::new(state.next_id());
        let row = Server {
            id,
            title: server.title.clone(),
            content: server.content.clone(),
            cover: server.cover.clone(),
            ip: server.ip.clone(),
            version_id: server.version_id,
            slots: server.slots,
            published: server.published,
            last_updated: server.last_updated,
            author_id: server.author_id,
            created_at: now,
            updated_at: now,
        };

        state.servers.insert(id, row.clone());
        state
            .server_tags
            .extend(tag_ids.iter().map(|tag_id| (id, *tag_id)));

        Ok(row)
    }

    async fn update(&self, id: ServerId, changes: &ServerChanges) -> RepoResult<Server> {
        let mut state = self.state.lock().await;
        let server = state.server_mut(id)?;
        changes.apply_to(server);
        Ok(server.clone())
    }

    async fn connect_tags(&self, id: ServerId, tag_ids: &[TagId]) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        state.ensure_server(id)?;
        state
            .server_tags
            .extend(tag_ids.iter().map(|tag_id| (id, *tag_id)));
        Ok(())
    }

    async fn disconnect_tags_by_name(&self, id: ServerId, names: &[String]) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        state.ensure_server(id)?;

        let doomed: Vec<TagId> = state
            .tags
            .iter()
            .filter(|tag| names.contains(&tag.name))
            .map(|tag| tag.id)
            .collect();
        state
            .server_tags
            .retain(|(server_id, tag_id)| *server_id != id || !doomed.contains(tag_id));
        Ok(())
    }

    async fn set_tags(&self, id: ServerId, tag_ids: &[TagId]) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        state.ensure_server(id)?;
        state.server_tags.retain(|(server_id, _)| *server_id != id);
        state
            .server_tags
            .extend(tag_ids.iter().map(|tag_id| (id, *tag_id)));
        Ok(())
    }

    async fn tags_of(&self, id: ServerId) -> RepoResult<Vec<Tag>> {
        let state = self.state.lock().await;
        let mut tags: Vec<Tag> = state
            .tags
            .iter()
            .filter(|tag| state.server_tags.contains(&(id, tag.id)))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn vote_count(&self, id: ServerId) -> RepoResult<i64> {
        Ok(self.votes_for(id).await as i64)
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn upsert_by_name(&self, name: &str) -> RepoResult<TagLink> {
        let mut state = self.state.lock().await;
        if let Some(tag) = state.tags.iter().find(|tag| tag.name == name) {
            return Ok(TagLink::from_upsert(tag.clone(), false));
        }

        let tag = Tag {
            id: TagId::new(state.next_id()),
            name: name.to_string(),
        };
        state.tags.push(tag.clone());
        Ok(TagLink::from_upsert(tag, true))
    }
}

#[async_trait]
impl VersionRepository for MemoryStore {
    async fn find_by_id(&self, id: VersionId) -> RepoResult<Option<Version>> {
        let state = self.state.lock().await;
        Ok(state.versions.iter().find(|version| version.id == id).cloned())
    }

    async fn upsert_by_name(&self, name: &str) -> RepoResult<VersionLink> {
        let mut state = self.state.lock().await;
        if let Some(version) = state.versions.iter().find(|version| version.name == name) {
            return Ok(VersionLink::from_upsert(version.clone(), false));
        }

        let version = Version {
            id: VersionId::new(state.next_id()),
            name: name.to_string(),
        };
        state.versions.push(version.clone());
        Ok(VersionLink::from_upsert(version, true))
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn insert_if_absent(
        &self,
        author_id: UserId,
        server_id: ServerId,
        cast_at: DateTime<Utc>,
    ) -> RepoResult<Option<Vote>> {
        let mut state = self.state.lock().await;
        state.ensure_server(server_id)?;

        let window = MonthWindow::containing(cast_at);
        let already_voted = state.votes.iter().any(|vote| {
            vote.author_id == author_id
                && vote.server_id == server_id
                && window.contains(vote.created_at)
        });
        if already_voted {
            return Ok(None);
        }

        let vote = Vote {
            id: VoteId::new(state.next_id()),
            author_id,
            server_id,
            created_at: cast_at,
        };
        state.votes.push(vote.clone());
        Ok(Some(vote))
    }

    async fn delete_for_server(&self, server_id: ServerId) -> RepoResult<u64> {
        let mut state = self.state.lock().await;
        let before = state.votes.len();
        state.votes.retain(|vote| vote.server_id != server_id);
        Ok((before - state.votes.len()) as u64)
    }
}
