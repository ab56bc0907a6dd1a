//! Test fixtures and data generators
//!
//! Forum accounts known to the stub OAuth provider, server addresses known to
//! the stub status provider, and GraphQL documents for the mutations.

use mclist_core::{UserId, UserProfile};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Accounts
// ============================================================================

pub const PLAYER_ID: i32 = 101;
pub const OTHER_PLAYER_ID: i32 = 102;
pub const ADMIN_ID: i32 = 900;

/// Authorization code the stub provider accepts for a forum user id
pub fn code_for(id: i32) -> String {
    format!("code-{id}")
}

pub fn profile(id: i32) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        name: format!("player{id}"),
        email: format!("player{id}@example.com"),
        photo_url: Some(format!("https://forum.example.com/photos/{id}.png")),
        posts: 12,
    }
}

// ============================================================================
// Server addresses
// ============================================================================

pub const ONLINE_IP: &str = "play.example.net";
pub const ONLINE_VERSION: &str = "1.20.4";
pub const ONLINE_SLOTS: i32 = 100;

pub const OTHER_ONLINE_IP: &str = "hub.example.net";
pub const OTHER_ONLINE_VERSION: &str = "1.21";
pub const OTHER_ONLINE_SLOTS: i32 = 250;

pub const OFFLINE_IP: &str = "down.example.net";
pub const UNREACHABLE_IP: &str = "timeout.example.net";

// ============================================================================
// Listing input
// ============================================================================

pub const VALID_TITLE: &str = "Vanilla survival with friends";

/// Content at the minimum allowed length
pub fn valid_content() -> String {
    "A friendly survival server. ".repeat(10)
}

pub const VALID_COVER: &str = "https://cdn.example.com/covers/server.png";

// ============================================================================
// GraphQL documents
// ============================================================================

pub const SERVER_SELECTION: &str = r"
    __typename
    ... on ServerPayload {
        server {
            id title content cover ip slots published authorId voteCount lastUpdated
            version { name }
            tags { name }
        }
    }
    ... on MutationError { code message }
";

pub const AUTH_SELECTION: &str = r"
    __typename
    ... on AuthPayload { user { id username email role banned posts } }
    ... on MutationError { code message }
";

pub const USER_SELECTION: &str = r"
    __typename
    ... on UserPayload { user { id role banned } }
    ... on MutationError { code message }
";

pub const OUTCOME_SELECTION: &str = r"
    __typename
    ... on Outcome { outcome }
    ... on MutationError { code message }
";

/// `mutation($vars) { field(args) { selection } }`
pub fn mutation(variables: &str, call: &str, selection: &str) -> String {
    if variables.is_empty() {
        format!("mutation {{ {call} {{ {selection} }} }}")
    } else {
        format!("mutation({variables}) {{ {call} {{ {selection} }} }}")
    }
}

pub fn create_server_mutation() -> String {
    mutation(
        "$title: String!, $content: String, $cover: String, $tags: [String!]!, $ip: String!",
        "createServer(title: $title, content: $content, cover: $cover, tags: $tags, ip: $ip)",
        SERVER_SELECTION,
    )
}

pub fn update_server_mutation() -> String {
    mutation(
        "$id: Int!, $title: String!, $content: String, $cover: String, $tags: [String!]!, $ip: String!",
        "updateServer(id: $id, title: $title, content: $content, cover: $cover, tags: $tags, ip: $ip)",
        SERVER_SELECTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content_is_at_the_lower_bound() {
        assert_eq!(valid_content().chars().count(), 280);
    }

    #[test]
    fn test_mutation_document() {
        assert_eq!(
            mutation("", "logout", "__typename"),
            "mutation { logout { __typename } }"
        );
    }
}
