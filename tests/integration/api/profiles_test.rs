//! Profile API integration tests
//!
//! Tests for listing, creating, renaming and deleting profiles, including
//! the ownership rules.

use axum::http::StatusCode;
use palabrator::backend::profiles::Profile;
use palabrator::backend::store::ProfileStore;
use palabrator::shared::PaginationResult;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::TestApp;
use crate::{assert_failure, assert_status};

#[tokio::test]
async fn test_create_then_list() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;

    let response = app
        .server
        .post("/profiles")
        .authorization_bearer(&alice.token)
        .json(&json!({ "name": "work" }))
        .await;

    assert_status!(response, StatusCode::CREATED);
    let page: PaginationResult<Profile> = response.json();
    assert_eq!(page.count, 1);
    assert_eq!(page.list[0].name, "work");
    assert_eq!(page.list[0].owner, alice.user.id);

    let response = app
        .server
        .get("/profiles")
        .authorization_bearer(&alice.token)
        .await;

    assert_status!(response, StatusCode::OK);
    let listed: PaginationResult<Profile> = response.json();
    assert_eq!(listed, page);
}

#[tokio::test]
async fn test_list_is_scoped_to_caller() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let bob = app.seed_unique_user().await;
    app.store.insert_profile(alice.user.id, "alice-only").await.unwrap();

    let response = app
        .server
        .get("/profiles")
        .authorization_bearer(&bob.token)
        .await;

    assert_status!(response, StatusCode::OK);
    let page: PaginationResult<Profile> = response.json();
    assert_eq!(page.count, 0);
    assert!(page.list.is_empty());
}

#[tokio::test]
async fn test_create_requires_name() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;

    let response = app
        .server
        .post("/profiles")
        .authorization_bearer(&alice.token)
        .json(&json!({ "name": "   " }))
        .await;
    assert_failure!(response, StatusCode::BAD_REQUEST, "Profile name is not present in body");

    let response = app
        .server
        .post("/profiles")
        .authorization_bearer(&alice.token)
        .json(&json!({}))
        .await;
    assert_failure!(response, StatusCode::BAD_REQUEST, "Profile name is not present in body");

    assert_eq!(app.store.profile_count().await, 0);
}

#[tokio::test]
async fn test_duplicate_name_per_owner() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let bob = app.seed_unique_user().await;
    app.store.insert_profile(alice.user.id, "home").await.unwrap();

    let response = app
        .server
        .post("/profiles")
        .authorization_bearer(&alice.token)
        .json(&json!({ "name": "home" }))
        .await;
    assert_failure!(response, StatusCode::BAD_REQUEST, "The Profile Already Exists");

    let response = app
        .server
        .post("/profiles")
        .authorization_bearer(&bob.token)
        .json(&json!({ "name": "home" }))
        .await;
    assert_status!(response, StatusCode::CREATED);
}

#[tokio::test]
async fn test_pagination_second_page() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    for i in 1..=25 {
        app.store
            .insert_profile(alice.user.id, &format!("profile-{i:02}"))
            .await
            .unwrap();
    }

    let response = app
        .server
        .get("/profiles")
        .authorization_bearer(&alice.token)
        .add_query_param("page", 2)
        .add_query_param("limit", 10)
        .await;

    assert_status!(response, StatusCode::OK);
    let page: PaginationResult<Profile> = response.json();
    assert_eq!(page.count, 25);
    let names: Vec<String> = page.list.into_iter().map(|p| p.name).collect();
    let expected: Vec<String> = (11..=20).map(|i| format!("profile-{i:02}")).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_pagination_defaults_and_clamping() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    for i in 0..15 {
        app.store
            .insert_profile(alice.user.id, &format!("p{i}"))
            .await
            .unwrap();
    }

    let response = app
        .server
        .get("/profiles")
        .authorization_bearer(&alice.token)
        .await;
    let page: PaginationResult<Profile> = response.json();
    assert_eq!(page.list.len(), 10);

    let response = app
        .server
        .get("/profiles")
        .authorization_bearer(&alice.token)
        .add_query_param("page", 0)
        .add_query_param("limit", 5000)
        .await;
    assert_status!(response, StatusCode::OK);
    let page: PaginationResult<Profile> = response.json();
    assert_eq!(page.count, 15);
    assert_eq!(page.list.len(), 15);
}

#[tokio::test]
async fn test_malformed_query_is_rejected() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;

    let response = app
        .server
        .get("/profiles")
        .authorization_bearer(&alice.token)
        .add_query_param("page", "abc")
        .await;

    assert_failure!(response, StatusCode::BAD_REQUEST, "Invalid pagination parameters");
}

#[tokio::test]
async fn test_rename_success() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let profile = app.store.insert_profile(alice.user.id, "old").await.unwrap();

    let renamed = Profile {
        name: "new".to_string(),
        ..profile.clone()
    };
    let response = app
        .server
        .put("/profiles")
        .authorization_bearer(&alice.token)
        .json(&renamed)
        .await;

    assert_status!(response, StatusCode::OK);
    let echoed: Profile = response.json();
    assert_eq!(echoed, renamed);
    assert_eq!(app.store.find_profile(profile.id).await.unwrap().name, "new");
}

#[tokio::test]
async fn test_rename_owner_mismatch_is_unauthorized() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let bob = app.seed_unique_user().await;
    let profile = app.store.insert_profile(alice.user.id, "alice").await.unwrap();

    let attempt = Profile {
        name: "stolen".to_string(),
        ..profile.clone()
    };
    let response = app
        .server
        .put("/profiles")
        .authorization_bearer(&bob.token)
        .json(&attempt)
        .await;

    assert_failure!(response, StatusCode::UNAUTHORIZED, "You don't have access to this resource");
    assert_eq!(app.store.find_profile(profile.id).await.unwrap().name, "alice");
}

#[tokio::test]
async fn test_rename_to_taken_name() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let profile = app.store.insert_profile(alice.user.id, "one").await.unwrap();
    app.store.insert_profile(alice.user.id, "two").await.unwrap();

    let response = app
        .server
        .put("/profiles")
        .authorization_bearer(&alice.token)
        .json(&Profile {
            name: "two".to_string(),
            ..profile
        })
        .await;

    assert_failure!(response, StatusCode::BAD_REQUEST, "This profile name already exists");
}

#[tokio::test]
async fn test_rename_unknown_profile() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;

    let response = app
        .server
        .put("/profiles")
        .authorization_bearer(&alice.token)
        .json(&Profile {
            id: Uuid::new_v4(),
            owner: alice.user.id,
            name: "ghost".to_string(),
        })
        .await;

    assert_failure!(response, StatusCode::UNPROCESSABLE_ENTITY, "Failed to update the profile");
}

#[tokio::test]
async fn test_rename_malformed_body() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;

    let response = app
        .server
        .put("/profiles")
        .authorization_bearer(&alice.token)
        .json(&json!({ "name": "missing id and owner" }))
        .await;

    assert_failure!(response, StatusCode::BAD_REQUEST, "Profile is not present in body");
}

#[tokio::test]
async fn test_delete_success() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let profile = app.store.insert_profile(alice.user.id, "bye").await.unwrap();

    let response = app
        .server
        .delete("/profiles")
        .authorization_bearer(&alice.token)
        .json(&profile)
        .await;

    assert_status!(response, StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
    assert_eq!(app.store.profile_count().await, 0);
}

#[tokio::test]
async fn test_delete_owner_mismatch_is_unauthorized() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let bob = app.seed_unique_user().await;
    let profile = app.store.insert_profile(alice.user.id, "keep").await.unwrap();

    let response = app
        .server
        .delete("/profiles")
        .authorization_bearer(&bob.token)
        .json(&profile)
        .await;

    assert_failure!(response, StatusCode::UNAUTHORIZED, "You don't have access to this resource");
    assert!(app.store.find_profile(profile.id).await.is_some());
}

#[tokio::test]
async fn test_delete_with_forged_owner_leaves_record() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let bob = app.seed_unique_user().await;
    let profile = app.store.insert_profile(alice.user.id, "keep").await.unwrap();

    // Bob claims ownership of Alice's profile id
    let forged = Profile {
        owner: bob.user.id,
        ..profile.clone()
    };
    let response = app
        .server
        .delete("/profiles")
        .authorization_bearer(&bob.token)
        .json(&forged)
        .await;

    assert_failure!(response, StatusCode::UNPROCESSABLE_ENTITY, "Failed to delete the profile");
    assert_eq!(app.store.find_profile(profile.id).await, Some(profile));
}

#[tokio::test]
async fn test_rename_with_forged_owner_leaves_record() {
    let app = TestApp::new();
    let alice = app.seed_unique_user().await;
    let bob = app.seed_unique_user().await;
    let profile = app.store.insert_profile(alice.user.id, "keep").await.unwrap();

    let forged = Profile {
        id: profile.id,
        owner: bob.user.id,
        name: "mine now".to_string(),
    };
    let response = app
        .server
        .put("/profiles")
        .authorization_bearer(&bob.token)
        .json(&forged)
        .await;

    assert_failure!(response, StatusCode::UNPROCESSABLE_ENTITY, "Failed to update the profile");
    assert_eq!(app.store.find_profile(profile.id).await, Some(profile));
}
