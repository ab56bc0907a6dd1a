//! User entity - an account mirrored from the OAuth provider

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, UserId};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub role: Role,
    pub banned: bool,
    pub posts: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh user from a provider profile
    pub fn from_profile(profile: UserProfile) -> Self {
        let now = Utc::now();
        Self {
            id: profile.id,
            username: profile.name,
            photo_url: profile.photo_url,
            email: profile.email,
            role: Role::User,
            banned: false,
            posts: profile.posts,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    #[inline]
    pub fn is_banned(&self) -> bool {
        self.banned
    }

    /// Refresh the provider-owned fields, leaving role and ban state untouched
    pub fn apply_profile(&mut self, profile: UserProfile) {
        self.username = profile.name;
        self.photo_url = profile.photo_url;
        self.email = profile.email;
        self.posts = profile.posts;
        self.updated_at = Utc::now();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    pub fn set_banned(&mut self, banned: bool) {
        self.banned = banned;
        self.updated_at = Utc::now();
    }
}

/// Profile returned by the OAuth provider's "me" endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub posts: i32,
}
