use super::Harness;
use crate::cache::QueryKey;
use crate::guard::{current_user_query, dashboard_loader};
use crate::router::Loader;
use jobtrack_http::Session;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn ana() -> serde_json::Value {
    json!({ "user": { "_id": "64b0c0ffee", "name": "Ana", "email": "ana@example.com" } })
}

async fn mount_session(h: &Harness, body: serde_json::Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/users/current-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(&h.server)
        .await;
}

#[tokio::test]
async fn signed_in_user_reaches_the_dashboard() {
    let h = Harness::start().await;
    mount_session(&h, ana(), 1).await;

    let loaded = dashboard_loader(&h.client, &h.queries).await;
    let user = loaded.data().expect("user data");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email.as_deref(), Some("ana@example.com"));
}

#[tokio::test]
async fn rejected_session_redirects_to_root() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/users/current-user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "Authentication invalid" })))
        .mount(&h.server)
        .await;

    let loaded = dashboard_loader(&h.client, &h.queries).await;
    assert_eq!(loaded.redirect_target(), Some("/"));
    assert!(h.queries.get_query_data::<Session>(&QueryKey::current_user()).is_none());
}

#[tokio::test]
async fn server_failure_redirects_to_root() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/users/current-user"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    let loaded = dashboard_loader(&h.client, &h.queries).await;
    assert_eq!(loaded, Loader::redirect("/"));
}

#[tokio::test]
async fn session_without_user_redirects_to_root() {
    let h = Harness::start().await;
    mount_session(&h, json!({ "user": null }), 1).await;

    let loaded = dashboard_loader(&h.client, &h.queries).await;
    assert_eq!(loaded.redirect_target(), Some("/"));
}

#[tokio::test]
async fn cached_session_is_not_refetched() {
    let h = Harness::start().await;
    mount_session(&h, ana(), 1).await;

    for _ in 0..3 {
        assert!(dashboard_loader(&h.client, &h.queries).await.data().is_some());
    }
    let cached = h.queries.get_query_data::<Session>(&QueryKey::current_user());
    assert_eq!(cached.and_then(|s| s.user).map(|u| u.name).as_deref(), Some("Ana"));
}

#[tokio::test]
async fn concurrent_guards_share_one_request() {
    let h = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/users/current-user"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ana())
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let (a, b) = futures::join!(
        current_user_query(&h.client, &h.queries),
        current_user_query(&h.client, &h.queries),
    );
    assert_eq!(a.unwrap(), b.unwrap());
}

#[tokio::test]
async fn invalidation_forces_a_refetch() {
    let h = Harness::start().await;
    mount_session(&h, ana(), 2).await;

    assert!(dashboard_loader(&h.client, &h.queries).await.data().is_some());
    h.queries.invalidate_all();
    assert!(dashboard_loader(&h.client, &h.queries).await.data().is_some());
}
