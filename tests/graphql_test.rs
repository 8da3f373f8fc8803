//! Integration tests for the GraphQL operations
//!
//! Covers the full operation surface over the in-memory store: link
//! listings with filter and pagination, account creation, sign-in, link
//! posting with and without an authenticated caller, and voting.

mod common;

use chrono::{DateTime, Utc};
use serde_json::json;

use common::{data, TestApp};
use hackernews_api::models::NewLink;

#[tokio::test]
async fn create_user_then_sign_in_returns_user_id_as_token() {
    let app = TestApp::new();

    let resp = app
        .execute(
            r#"mutation {
                createUser(name: "alice", authProvider: {email: "x@y.com", password: "p"}) {
                    id
                    name
                    email
                }
            }"#,
        )
        .await;
    let created = data(resp);
    let user_id = created["createUser"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["createUser"]["name"], "alice");
    assert_eq!(created["createUser"]["email"], "x@y.com");

    let resp = app
        .execute(
            r#"mutation {
                signinUser(auth: {email: "x@y.com", password: "p"}) {
                    token
                    user { id name }
                }
            }"#,
        )
        .await;
    let signin = data(resp);
    assert_eq!(signin["signinUser"]["token"], json!(user_id));
    assert_eq!(signin["signinUser"]["user"]["id"], json!(user_id));
}

#[tokio::test]
async fn sign_in_with_wrong_password_is_a_field_error() {
    let app = TestApp::new();
    app.register("alice", "x@y.com", "p").await;

    let resp = app
        .execute(
            r#"mutation {
                signinUser(auth: {email: "x@y.com", password: "wrong"}) { token }
            }"#,
        )
        .await;

    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "Invalid credentials");
    assert_eq!(resp.data.into_json().unwrap(), json!(null));
}

#[tokio::test]
async fn sign_in_with_unknown_email_reads_the_same_as_wrong_password() {
    let app = TestApp::new();

    let resp = app
        .execute(
            r#"mutation {
                signinUser(auth: {email: "nobody@y.com", password: "p"}) { token }
            }"#,
        )
        .await;

    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "Invalid credentials");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = TestApp::new();
    app.register("alice", "x@y.com", "p").await;

    let resp = app
        .execute(
            r#"mutation {
                createUser(name: "imposter", authProvider: {email: "x@y.com", password: "q"}) { id }
            }"#,
        )
        .await;

    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "Email already registered");
}

#[tokio::test]
async fn create_link_without_authorization_has_null_posted_by() {
    let app = TestApp::new();

    let resp = app
        .execute(
            r#"mutation {
                createLink(url: "https://example.com", description: "anon post") {
                    url
                    description
                    postedBy { id }
                }
            }"#,
        )
        .await;
    let created = data(resp);
    assert_eq!(created["createLink"]["url"], "https://example.com");
    assert_eq!(created["createLink"]["postedBy"], json!(null));
}

#[tokio::test]
async fn create_link_as_authenticated_user_attributes_the_poster() {
    let app = TestApp::new();
    let user = app.register("alice", "x@y.com", "p").await;

    let resp = app
        .execute_as(
            &user,
            r#"mutation {
                createLink(url: "https://example.com", description: "attributed") {
                    postedBy { id name }
                }
            }"#,
        )
        .await;
    let created = data(resp);
    assert_eq!(
        created["createLink"]["postedBy"]["id"],
        json!(user.id.to_string())
    );
    assert_eq!(created["createLink"]["postedBy"]["name"], "alice");
}

#[tokio::test]
async fn create_vote_assigns_a_server_timestamp_and_resolves_relations() {
    let app = TestApp::new();
    let user = app.register("alice", "x@y.com", "p").await;
    let link = app
        .stores
        .links
        .insert(NewLink {
            url: "https://example.com".to_string(),
            description: "votable".to_string(),
            posted_by: None,
        })
        .await
        .unwrap();

    let resp = app
        .execute_with_vars(
            r#"mutation CastVote($userId: UUID!, $linkId: UUID!) {
                createVote(userId: $userId, linkId: $linkId) {
                    createdAt
                    user { name }
                    link { url }
                }
            }"#,
            json!({"userId": user.id, "linkId": link.id}),
        )
        .await;
    let created = data(resp);

    let created_at = created["createVote"]["createdAt"].as_str().unwrap();
    let parsed: DateTime<Utc> = created_at.parse().expect("createdAt should be a timestamp");
    assert!((Utc::now() - parsed).num_seconds() < 60);

    assert_eq!(created["createVote"]["user"]["name"], "alice");
    assert_eq!(created["createVote"]["link"]["url"], "https://example.com");
}

#[tokio::test]
async fn all_links_supports_filter_skip_and_first() {
    let app = TestApp::new();
    for (url, description) in [
        ("https://graphql.org", "graphql spec"),
        ("https://example.com/a", "first tutorial"),
        ("https://example.com/b", "second tutorial"),
        ("https://example.com/c", "third tutorial"),
    ] {
        app.stores
            .links
            .insert(NewLink {
                url: url.to_string(),
                description: description.to_string(),
                posted_by: None,
            })
            .await
            .unwrap();
    }

    let resp = app
        .execute(r#"{ allLinks(filter: {description_contains: "tutorial"}, skip: 1, first: 2) { description } }"#)
        .await;
    let listed = data(resp);
    let descriptions: Vec<&str> = listed["allLinks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, ["second tutorial", "third tutorial"]);

    // A url_contains condition widens the match (OR semantics)
    let resp = app
        .execute(
            r#"{ allLinks(filter: {description_contains: "spec", url_contains: "example"}) { url } }"#,
        )
        .await;
    let listed = data(resp);
    assert_eq!(listed["allLinks"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn dangling_poster_fk_resolves_to_null_without_an_error() {
    let app = TestApp::new();
    app.stores
        .links
        .insert(NewLink {
            url: "https://example.com".to_string(),
            description: "orphaned".to_string(),
            posted_by: Some(uuid::Uuid::new_v4()),
        })
        .await
        .unwrap();

    let resp = app.execute("{ allLinks { url postedBy { name } } }").await;
    let listed = data(resp);
    assert_eq!(listed["allLinks"][0]["postedBy"], json!(null));
}

#[tokio::test]
async fn store_failure_errors_dependent_fields_but_not_siblings() {
    let app = TestApp::new();
    let user = app.register("alice", "x@y.com", "p").await;
    for n in 0..3 {
        app.stores
            .links
            .insert(NewLink {
                url: format!("https://example.com/{n}"),
                description: format!("link-{n}"),
                posted_by: Some(user.id),
            })
            .await
            .unwrap();
    }
    app.store.set_fail_user_batches(true);

    let resp = app.execute("{ allLinks { url postedBy { name } } }").await;

    assert!(!resp.errors.is_empty());
    let listed = resp.data.into_json().unwrap();
    let links = listed["allLinks"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    for (n, link) in links.iter().enumerate() {
        // The sibling scalar field survives; only the dependent field nulls
        assert_eq!(link["url"], json!(format!("https://example.com/{n}")));
        assert_eq!(link["postedBy"], json!(null));
    }
}

#[tokio::test]
async fn resolving_the_same_document_twice_yields_identical_data() {
    let app = TestApp::new();
    let user = app.register("alice", "x@y.com", "p").await;
    for n in 0..5 {
        app.stores
            .links
            .insert(NewLink {
                url: format!("https://example.com/{n}"),
                description: format!("link-{n}"),
                posted_by: Some(user.id),
            })
            .await
            .unwrap();
    }

    let query = "{ allLinks { url description postedBy { id name email } } }";
    let first = data(app.execute(query).await);
    let second = data(app.execute(query).await);
    assert_eq!(first, second);
}
