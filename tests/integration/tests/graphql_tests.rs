//! GraphQL mutation tests
//!
//! Executes the real schema against the in-memory store and stub providers.

use chrono::{TimeZone, Utc};
use mclist_api::cookies::RequestCookies;
use mclist_core::{Role, ServerId, UserId};
use mclist_integration_tests::*;
use mclist_service::{TagService, VoteService};
use serde_json::{json, Value};

// ============================================================================
// Helpers
// ============================================================================

fn server_vars(ip: &str, tags: &[&str]) -> Value {
    json!({
        "title": VALID_TITLE,
        "content": valid_content(),
        "cover": VALID_COVER,
        "tags": tags,
        "ip": ip,
    })
}

async fn create_server(app: &TestApp, cookies: &RequestCookies, tags: &[&str]) -> i64 {
    let result = app
        .execute(&create_server_mutation(), server_vars(ONLINE_IP, tags), cookies)
        .await;
    let payload = result.field("createServer");
    assert_eq!(payload["__typename"], "ServerPayload", "{payload}");
    payload["server"]["id"].as_i64().expect("server id")
}

fn assert_error(payload: &Value, code: &str) {
    assert_eq!(payload["__typename"], "MutationError", "{payload}");
    assert_eq!(payload["code"], code, "{payload}");
}

fn tag_names(server: &Value) -> Vec<String> {
    let mut names: Vec<String> = server["tags"]
        .as_array()
        .expect("tags")
        .iter()
        .filter_map(|tag| tag["name"].as_str().map(String::from))
        .collect();
    names.sort();
    names
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_login_sets_http_only_cookies() {
    let app = TestApp::new();
    let result = app
        .execute_anonymous(
            &mutation("$code: String!", "oAuthLogin(code: $code)", AUTH_SELECTION),
            json!({ "code": code_for(PLAYER_ID) }),
        )
        .await;

    let payload = result.field("oAuthLogin");
    assert_eq!(payload["__typename"], "AuthPayload");
    assert_eq!(payload["user"]["id"], PLAYER_ID);
    assert_eq!(payload["user"]["username"], format!("player{PLAYER_ID}"));
    assert_eq!(payload["user"]["role"], "user");
    assert_eq!(payload["user"]["banned"], false);

    for name in ["accessToken", "refreshToken"] {
        let cookie = result.set_cookie(name).expect("token cookie");
        assert!(cookie.contains("HttpOnly"), "{cookie}");
        assert!(cookie.contains("Path=/"), "{cookie}");
    }

    let cookies = result.cookies();
    assert!(cookies.access_token.is_some());
    assert!(cookies.refresh_token.is_some());
    assert!(app.store.stored_user(UserId::new(PLAYER_ID)).await.is_some());
}

#[tokio::test]
async fn test_login_twice_updates_the_same_user() {
    let app = TestApp::new();
    app.login(PLAYER_ID).await;
    app.login(PLAYER_ID).await;

    let user = app.store.stored_user(UserId::new(PLAYER_ID)).await.unwrap();
    assert_eq!(user.email, format!("player{PLAYER_ID}@example.com"));
}

#[tokio::test]
async fn test_login_with_bad_code_is_an_error_payload() {
    let app = TestApp::new();
    let result = app
        .execute_anonymous(
            &mutation("$code: String!", "oAuthLogin(code: $code)", AUTH_SELECTION),
            json!({ "code": "not-a-code" }),
        )
        .await;

    let payload = result.field("oAuthLogin");
    assert_error(payload, "EXTERNAL_SERVICE_ERROR");
    assert!(payload["message"]
        .as_str()
        .unwrap()
        .starts_with("There was a problem fetching your token."));
    assert!(result.set_cookies.is_empty());
}

#[tokio::test]
async fn test_refresh_reissues_cookies() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let result = app
        .execute(&mutation("", "refresh", AUTH_SELECTION), json!({}), &cookies)
        .await;

    let payload = result.field("refresh");
    assert_eq!(payload["__typename"], "AuthPayload");
    assert_eq!(payload["user"]["id"], PLAYER_ID);
    assert!(result.set_cookie("accessToken").is_some());
    assert!(result.set_cookie("refreshToken").is_some());
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = TestApp::new();
    let result = app
        .execute_anonymous(&mutation("", "refresh", AUTH_SELECTION), json!({}))
        .await;

    assert_error(result.field("refresh"), "MISSING_AUTH");
    assert!(result.set_cookies.is_empty());
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;
    let swapped = RequestCookies {
        access_token: None,
        refresh_token: cookies.access_token.clone(),
    };

    let result = app
        .execute(&mutation("", "refresh", AUTH_SELECTION), json!({}), &swapped)
        .await;
    assert_error(result.field("refresh"), "INVALID_TOKEN");
}

#[tokio::test]
async fn test_logout_clears_cookies() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let result = app
        .execute(&mutation("", "logout", OUTCOME_SELECTION), json!({}), &cookies)
        .await;

    let payload = result.field("logout");
    assert_eq!(payload["__typename"], "Outcome");
    assert_eq!(payload["outcome"], "You've been logged out.");

    let cleared = result.cookies();
    assert!(cleared.access_token.is_none());
    assert!(cleared.refresh_token.is_none());
    assert!(result.set_cookie("accessToken").unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_me_query() {
    let app = TestApp::new();
    let query = "{ me { id username role } }";

    let anonymous = app.execute_anonymous(query, json!({})).await;
    assert!(anonymous.field("me").is_null());

    let cookies = app.login(PLAYER_ID).await;
    let result = app.execute(query, json!({}), &cookies).await;
    assert_eq!(result.field("me")["id"], PLAYER_ID);
}

// ============================================================================
// Servers
// ============================================================================

#[tokio::test]
async fn test_create_server_uses_live_status() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let result = app
        .execute(
            &create_server_mutation(),
            server_vars(ONLINE_IP, &["Survival", "pvp"]),
            &cookies,
        )
        .await;

    let server = &result.field("createServer")["server"];
    assert_eq!(server["title"], VALID_TITLE);
    assert_eq!(server["ip"], ONLINE_IP);
    assert_eq!(server["slots"], ONLINE_SLOTS);
    assert_eq!(server["version"]["name"], ONLINE_VERSION);
    assert_eq!(server["published"], true);
    assert_eq!(server["authorId"], PLAYER_ID);
    assert_eq!(server["voteCount"], 0);
    assert!(!server["lastUpdated"].is_null());
    assert_eq!(tag_names(server), vec!["Survival", "pvp"]);
    assert_eq!(app.store.all_version_names().await, vec![ONLINE_VERSION]);
}

#[tokio::test]
async fn test_create_server_reuses_existing_tags() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    create_server(&app, &cookies, &["survival"]).await;
    create_server(&app, &cookies, &["survival", "creative"]).await;

    let mut names = app.store.all_tag_names().await;
    names.sort();
    assert_eq!(names, vec!["creative", "survival"]);
}

#[tokio::test]
async fn test_resolve_tags_splits_existing_and_new() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;
    create_server(&app, &cookies, &["pvp"]).await;
    let tags = TagService::new(app.services());

    let resolved = tags
        .resolve_tags(&[" pvp ", "factions", "pvp", "", "factions"])
        .await
        .unwrap();

    let connected: Vec<&str> = resolved.connect.iter().map(|tag| tag.name.as_str()).collect();
    let created: Vec<&str> = resolved.create.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(connected, vec!["pvp"]);
    assert_eq!(created, vec!["factions"]);
    assert_eq!(resolved.len(), 2);

    let mut names = app.store.all_tag_names().await;
    names.sort();
    assert_eq!(names, vec!["factions", "pvp"]);

    let again = tags.resolve_tags(&["factions"]).await.unwrap();
    assert!(again.create.is_empty());
    assert_eq!(again.connect.len(), 1);
}

#[tokio::test]
async fn test_create_server_requires_login() {
    let app = TestApp::new();
    let result = app
        .execute_anonymous(&create_server_mutation(), server_vars(ONLINE_IP, &["pvp"]))
        .await;

    assert_error(result.field("createServer"), "MISSING_AUTH");
}

#[tokio::test]
async fn test_create_server_validation_messages() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let cases = [
        ("title", json!("Too short"), "Title must be at least 10 characters long."),
        ("content", json!("Short content"), "Content must be at least 280 characters long."),
        ("cover", json!("not a url"), "Cover needs to be an url."),
        ("cover", json!("https://cdn.example.com/cover.txt"), "Cover needs to be an image."),
        ("tags", json!([]), "You need to specify at least one tag to add."),
    ];

    for (field, value, message) in cases {
        let mut vars = server_vars(ONLINE_IP, &["pvp"]);
        vars[field] = value;

        let result = app.execute(&create_server_mutation(), vars, &cookies).await;
        let payload = result.field("createServer");
        assert_error(payload, "VALIDATION_ERROR");
        assert_eq!(payload["message"], message, "field {field}");
    }
}

#[tokio::test]
async fn test_title_is_checked_before_content() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let mut vars = server_vars(ONLINE_IP, &["pvp"]);
    vars["title"] = json!("short");
    vars["content"] = json!("short");

    let result = app.execute(&create_server_mutation(), vars, &cookies).await;
    assert_eq!(
        result.field("createServer")["message"],
        "Title must be at least 10 characters long."
    );
}

#[tokio::test]
async fn test_create_server_offline() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let result = app
        .execute(&create_server_mutation(), server_vars(OFFLINE_IP, &["pvp"]), &cookies)
        .await;

    let payload = result.field("createServer");
    assert_error(payload, "SERVER_OFFLINE");
    assert_eq!(payload["message"], "Could not find server info.");
}

#[tokio::test]
async fn test_create_server_status_unreachable() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let result = app
        .execute(
            &create_server_mutation(),
            server_vars(UNREACHABLE_IP, &["pvp"]),
            &cookies,
        )
        .await;

    assert_error(result.field("createServer"), "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_banned_user_cannot_create() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;
    app.store.set_banned(UserId::new(PLAYER_ID), true).await;

    let result = app
        .execute(&create_server_mutation(), server_vars(ONLINE_IP, &["pvp"]), &cookies)
        .await;

    let payload = result.field("createServer");
    assert_error(payload, "USER_BANNED");
    assert_eq!(payload["message"], "Your account has been banned");
}

#[tokio::test]
async fn test_update_server_replaces_tags_and_status() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;
    let id = create_server(&app, &cookies, &["survival", "pvp"]).await;

    let mut vars = server_vars(OTHER_ONLINE_IP, &["pvp", "minigames"]);
    vars["id"] = json!(id);
    vars["title"] = json!("A renamed survival server");

    let result = app.execute(&update_server_mutation(), vars, &cookies).await;
    let server = &result.field("updateServer")["server"];
    assert_eq!(server["title"], "A renamed survival server");
    assert_eq!(server["ip"], OTHER_ONLINE_IP);
    assert_eq!(server["slots"], OTHER_ONLINE_SLOTS);
    assert_eq!(server["version"]["name"], OTHER_ONLINE_VERSION);
    assert_eq!(tag_names(server), vec!["minigames", "pvp"]);
}

#[tokio::test]
async fn test_non_author_cannot_update() {
    let app = TestApp::new();
    let author = app.login(PLAYER_ID).await;
    let other = app.login(OTHER_PLAYER_ID).await;
    let id = create_server(&app, &author, &["pvp"]).await;

    let result = app
        .execute(
            &mutation(
                "$id: Int!, $title: String!",
                "updateTitle(id: $id, title: $title)",
                SERVER_SELECTION,
            ),
            json!({ "id": id, "title": "Hijacked server title" }),
            &other,
        )
        .await;

    let payload = result.field("updateTitle");
    assert_error(payload, "INSUFFICIENT_PERMISSIONS");
    let stored = app.store.stored_server(ServerId::new(id as i32)).await.unwrap();
    assert_eq!(stored.title, VALID_TITLE);
}

#[tokio::test]
async fn test_admin_can_update_any_server() {
    let app = TestApp::new();
    let author = app.login(PLAYER_ID).await;
    let admin = app.login_admin().await;
    let id = create_server(&app, &author, &["pvp"]).await;

    let result = app
        .execute(
            &mutation(
                "$id: Int!, $title: String!",
                "updateTitle(id: $id, title: $title)",
                SERVER_SELECTION,
            ),
            json!({ "id": id, "title": "Moderated server title" }),
            &admin,
        )
        .await;

    assert_eq!(
        result.field("updateTitle")["server"]["title"],
        "Moderated server title"
    );
}

#[tokio::test]
async fn test_update_unknown_server() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;

    let result = app
        .execute(
            &mutation(
                "$id: Int!, $title: String!",
                "updateTitle(id: $id, title: $title)",
                SERVER_SELECTION,
            ),
            json!({ "id": 4242, "title": "Nobody owns this one" }),
            &cookies,
        )
        .await;

    assert_error(result.field("updateTitle"), "NOT_FOUND");
}

#[tokio::test]
async fn test_add_and_remove_tags() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;
    let id = create_server(&app, &cookies, &["survival"]).await;

    let add = app
        .execute(
            &mutation(
                "$id: Int!, $tags: [String!]!",
                "addTag(id: $id, tags: $tags)",
                SERVER_SELECTION,
            ),
            json!({ "id": id, "tags": ["pvp", "economy"] }),
            &cookies,
        )
        .await;
    assert_eq!(
        tag_names(&add.field("addTag")["server"]),
        vec!["economy", "pvp", "survival"]
    );

    let remove = app
        .execute(
            &mutation(
                "$id: Int!, $tags: [String!]!",
                "removeTag(id: $id, tags: $tags)",
                SERVER_SELECTION,
            ),
            json!({ "id": id, "tags": ["survival", "unknown"] }),
            &cookies,
        )
        .await;
    assert_eq!(
        tag_names(&remove.field("removeTag")["server"]),
        vec!["economy", "pvp"]
    );

    let empty = app
        .execute(
            &mutation(
                "$id: Int!, $tags: [String!]!",
                "removeTag(id: $id, tags: $tags)",
                SERVER_SELECTION,
            ),
            json!({ "id": id, "tags": [] }),
            &cookies,
        )
        .await;
    let payload = empty.field("removeTag");
    assert_error(payload, "VALIDATION_ERROR");
    assert_eq!(payload["message"], "You need to specify at least one tag to remove.");
}

#[tokio::test]
async fn test_update_ip_to_offline_server_keeps_old_ip() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;
    let id = create_server(&app, &cookies, &["pvp"]).await;

    let result = app
        .execute(
            &mutation("$id: Int!, $ip: String!", "updateIp(id: $id, ip: $ip)", SERVER_SELECTION),
            json!({ "id": id, "ip": OFFLINE_IP }),
            &cookies,
        )
        .await;

    assert_error(result.field("updateIp"), "SERVER_OFFLINE");
    let stored = app.store.stored_server(ServerId::new(id as i32)).await.unwrap();
    assert_eq!(stored.ip, ONLINE_IP);
}

#[tokio::test]
async fn test_update_remote_info() {
    let app = TestApp::new();
    let cookies = app.login(PLAYER_ID).await;
    let id = create_server(&app, &cookies, &["pvp"]).await;

    let result = app
        .execute(
            &mutation(
                "$id: Int!, $ip: String!",
                "updateRemoteInfo(id: $id, ip: $ip)",
                SERVER_SELECTION,
            ),
            json!({ "id": id, "ip": OTHER_ONLINE_IP }),
            &cookies,
        )
        .await;

    let server = &result.field("updateRemoteInfo")["server"];
    assert_eq!(server["slots"], OTHER_ONLINE_SLOTS);
    assert_eq!(server["version"]["name"], OTHER_ONLINE_VERSION);
}

#[tokio::test]
async fn test_delete_hides_and_publish_restores() {
    let app = TestApp::new();
    let author = app.login(PLAYER_ID).await;
    let other = app.login(OTHER_PLAYER_ID).await;
    let id = create_server(&app, &author, &["pvp"]).await;
    let lookup = "query($id: Int!) { server(id: $id) { id published } }";

    let deleted = app
        .execute(
            &mutation("$id: Int!", "deleteServer(id: $id)", SERVER_SELECTION),
            json!({ "id": id }),
            &author,
        )
        .await;
    assert_eq!(deleted.field("deleteServer")["server"]["published"], false);

    let hidden = app.execute(lookup, json!({ "id": id }), &other).await;
    assert!(hidden.field("server").is_null());
    let own = app.execute(lookup, json!({ "id": id }), &author).await;
    assert_eq!(own.field("server")["published"], false);

    let published = app
        .execute(
            &mutation("$id: Int!", "publishServer(id: $id)", SERVER_SELECTION),
            json!({ "id": id }),
            &author,
        )
        .await;
    assert_eq!(published.field("publishServer")["server"]["published"], true);

    let visible = app.execute_anonymous(lookup, json!({ "id": id })).await;
    assert_eq!(visible.field("server")["id"], id);
}

// ============================================================================
// Votes
// ============================================================================

#[tokio::test]
async fn test_vote_once_per_month() {
    let app = TestApp::new();
    let author = app.login(PLAYER_ID).await;
    let voter = app.login(OTHER_PLAYER_ID).await;
    let id = create_server(&app, &author, &["pvp"]).await;
    let vote = mutation("$id: Int!", "vote(id: $id)", OUTCOME_SELECTION);

    let first = app.execute(&vote, json!({ "id": id }), &voter).await;
    let payload = first.field("vote");
    assert_eq!(payload["__typename"], "Outcome");
    assert_eq!(payload["outcome"], "Your vote was added.");

    let second = app.execute(&vote, json!({ "id": id }), &voter).await;
    let payload = second.field("vote");
    assert_error(payload, "ALREADY_VOTED");
    assert_eq!(
        payload["message"],
        "You have already voted for this server this month."
    );

    assert_eq!(app.store.votes_for(ServerId::new(id as i32)).await, 1);
}

#[tokio::test]
async fn test_vote_again_next_month() {
    let app = TestApp::new();
    let author = app.login(PLAYER_ID).await;
    app.login(OTHER_PLAYER_ID).await;
    let id = ServerId::new(create_server(&app, &author, &["pvp"]).await as i32);
    let voter = app.store.stored_user(UserId::new(OTHER_PLAYER_ID)).await.unwrap();
    let votes = VoteService::new(app.services());

    let new_years_eve = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let new_year = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    votes.vote_at(&voter, id, new_years_eve).await.unwrap();
    assert!(votes.vote_at(&voter, id, new_years_eve).await.is_err());
    votes.vote_at(&voter, id, new_year).await.unwrap();

    assert_eq!(app.store.votes_for(id).await, 2);
}

#[tokio::test]
async fn test_vote_for_unknown_server() {
    let app = TestApp::new();
    let voter = app.login(OTHER_PLAYER_ID).await;

    let result = app
        .execute(
            &mutation("$id: Int!", "vote(id: $id)", OUTCOME_SELECTION),
            json!({ "id": 4242 }),
            &voter,
        )
        .await;
    assert_error(result.field("vote"), "NOT_FOUND");
}

#[tokio::test]
async fn test_vote_for_deleted_server() {
    let app = TestApp::new();
    let author = app.login(PLAYER_ID).await;
    let voter = app.login(OTHER_PLAYER_ID).await;
    let id = create_server(&app, &author, &["pvp"]).await;

    app.execute(
        &mutation("$id: Int!", "deleteServer(id: $id)", SERVER_SELECTION),
        json!({ "id": id }),
        &author,
    )
    .await;

    let result = app
        .execute(
            &mutation("$id: Int!", "vote(id: $id)", OUTCOME_SELECTION),
            json!({ "id": id }),
            &voter,
        )
        .await;
    assert_error(result.field("vote"), "NOT_FOUND");
    assert_eq!(app.store.votes_for(ServerId::new(id as i32)).await, 0);
}

#[tokio::test]
async fn test_reset_votes_is_admin_only() {
    let app = TestApp::new();
    let author = app.login(PLAYER_ID).await;
    let admin = app.login_admin().await;
    let id = create_server(&app, &author, &["pvp"]).await;

    app.execute(
        &mutation("$id: Int!", "vote(id: $id)", OUTCOME_SELECTION),
        json!({ "id": id }),
        &author,
    )
    .await;
    let reset = mutation("$id: Int!", "resetVotes(id: $id)", SERVER_SELECTION);

    let denied = app.execute(&reset, json!({ "id": id }), &author).await;
    assert_error(denied.field("resetVotes"), "INSUFFICIENT_PERMISSIONS");
    assert_eq!(app.store.votes_for(ServerId::new(id as i32)).await, 1);

    let done = app.execute(&reset, json!({ "id": id }), &admin).await;
    assert_eq!(done.field("resetVotes")["server"]["voteCount"], 0);
    assert_eq!(app.store.votes_for(ServerId::new(id as i32)).await, 0);
}

// ============================================================================
// User administration
// ============================================================================

#[tokio::test]
async fn test_update_role() {
    let app = TestApp::new();
    app.login(PLAYER_ID).await;
    let admin = app.login_admin().await;
    let update = mutation(
        "$id: Int!, $role: String!",
        "updateRole(id: $id, role: $role)",
        USER_SELECTION,
    );

    let result = app
        .execute(&update, json!({ "id": PLAYER_ID, "role": "admin" }), &admin)
        .await;
    assert_eq!(result.field("updateRole")["user"]["role"], "admin");

    let stored = app.store.stored_user(UserId::new(PLAYER_ID)).await.unwrap();
    assert_eq!(stored.role, Role::Admin);

    let invalid = app
        .execute(&update, json!({ "id": PLAYER_ID, "role": "owner" }), &admin)
        .await;
    assert_error(invalid.field("updateRole"), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_role_requires_admin() {
    let app = TestApp::new();
    let player = app.login(PLAYER_ID).await;

    let result = app
        .execute(
            &mutation(
                "$id: Int!, $role: String!",
                "updateRole(id: $id, role: $role)",
                USER_SELECTION,
            ),
            json!({ "id": PLAYER_ID, "role": "admin" }),
            &player,
        )
        .await;
    assert_error(result.field("updateRole"), "INSUFFICIENT_PERMISSIONS");
}

#[tokio::test]
async fn test_ban_takes_effect_on_existing_token() {
    let app = TestApp::new();
    let player = app.login(PLAYER_ID).await;
    let admin = app.login_admin().await;

    let result = app
        .execute(
            &mutation(
                "$id: Int!, $banned: Boolean!",
                "updateBan(id: $id, banned: $banned)",
                USER_SELECTION,
            ),
            json!({ "id": PLAYER_ID, "banned": true }),
            &admin,
        )
        .await;
    assert_eq!(result.field("updateBan")["user"]["banned"], true);

    let created = app
        .execute(&create_server_mutation(), server_vars(ONLINE_IP, &["pvp"]), &player)
        .await;
    assert_error(created.field("createServer"), "USER_BANNED");
}

#[tokio::test]
async fn test_ban_unknown_user() {
    let app = TestApp::new();
    let admin = app.login_admin().await;

    let result = app
        .execute(
            &mutation(
                "$id: Int!, $banned: Boolean!",
                "updateBan(id: $id, banned: $banned)",
                USER_SELECTION,
            ),
            json!({ "id": 777, "banned": true }),
            &admin,
        )
        .await;
    assert_error(result.field("updateBan"), "NOT_FOUND");
}

#[tokio::test]
async fn test_minted_tokens_authenticate() {
    let app = TestApp::new();
    app.login(OTHER_PLAYER_ID).await;
    let cookies = app.cookies_for(OTHER_PLAYER_ID).await;

    let result = app.execute("{ me { id } }", json!({}), &cookies).await;
    assert_eq!(result.field("me")["id"], OTHER_PLAYER_ID);
}
