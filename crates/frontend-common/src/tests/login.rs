use super::{Harness, Toast};
use crate::auth::{login_action, login_demo_user};
use crate::cache::QueryKey;
use crate::config::AppConfig;
use crate::router::ActionOutcome;
use jobtrack_http::{LoginRequest, Session};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn seed_stale_session(h: &Harness) {
    h.queries
        .set_query_data(QueryKey::current_user(), Session { user: None });
}

#[tokio::test]
async fn successful_login_redirects_to_dashboard() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "test@test.com", "password": "secret123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "msg": "user logged in" })))
        .expect(1)
        .mount(&h.server)
        .await;
    seed_stale_session(&h);

    let outcome = login_action(
        &h.client,
        &h.queries,
        h.notifier.as_ref(),
        LoginRequest {
            email: "test@test.com".to_string(),
            password: "secret123".to_string(),
        },
    )
    .await;

    assert_eq!(outcome.redirect_target(), Some("/dashboard"));
    assert_eq!(h.notifier.toasts(), vec![Toast::Success("Login successful".to_string())]);
    assert!(h.queries.get_query_data::<Session>(&QueryKey::current_user()).is_none());
}

#[tokio::test]
async fn rejected_login_shows_the_server_message() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "Invalid credentials" })))
        .mount(&h.server)
        .await;
    seed_stale_session(&h);

    let outcome = login_action(
        &h.client,
        &h.queries,
        h.notifier.as_ref(),
        LoginRequest {
            email: "ana@example.com".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await;

    assert!(matches!(outcome, ActionOutcome::Failed(_)));
    assert_eq!(outcome.redirect_target(), None);
    assert_eq!(h.notifier.toasts(), vec![Toast::Error("Invalid credentials".to_string())]);
    assert!(h.navigator.history().is_empty());
    // A failed attempt leaves the cache alone.
    assert!(h.queries.get_query_data::<Session>(&QueryKey::current_user()).is_some());
}

#[tokio::test]
async fn demo_login_uses_configured_account() {
    let h = Harness::start().await;
    let config = AppConfig {
        demo_email: "demo@jobtrack.dev".to_string(),
        demo_password: "drive".to_string(),
        ..AppConfig::default()
    };
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "demo@jobtrack.dev", "password": "drive" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&h.server)
        .await;
    seed_stale_session(&h);

    login_demo_user(&h.client, &h.queries, h.notifier.as_ref(), h.navigator.as_ref(), &config).await;

    assert_eq!(h.navigator.history(), vec!["/dashboard".to_string()]);
    assert_eq!(h.notifier.toasts(), vec![Toast::Success("Take a test drive!".to_string())]);
    assert!(h.queries.get_query_data::<Session>(&QueryKey::current_user()).is_none());
}

#[tokio::test]
async fn failed_demo_login_stays_put() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    login_demo_user(
        &h.client,
        &h.queries,
        h.notifier.as_ref(),
        h.navigator.as_ref(),
        &AppConfig::default(),
    )
    .await;

    assert!(h.navigator.history().is_empty());
    assert!(matches!(h.notifier.toasts().as_slice(), [Toast::Error(_)]));
}

/// Collects everything logged while it is the default subscriber
#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[tokio::test]
async fn login_attempts_do_not_log_the_email() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "Invalid credentials" })))
        .mount(&h.server)
        .await;

    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    for _ in 0..2 {
        login_action(
            &h.client,
            &h.queries,
            h.notifier.as_ref(),
            LoginRequest {
                email: "ana@example.com".to_string(),
                password: "secret".to_string(),
            },
        )
        .await;
    }

    let logs = logs.contents();
    assert!(logs.contains("logged in"));
    assert!(logs.contains("login rejected"));
    assert!(!logs.contains("ana@example.com"));
}

#[tokio::test]
async fn gateway_error_page_falls_back_to_generic_message() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("<html><body><h1>502 Bad Gateway</h1></body></html>"),
        )
        .mount(&h.server)
        .await;

    let outcome = login_action(
        &h.client,
        &h.queries,
        h.notifier.as_ref(),
        LoginRequest {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        },
    )
    .await;

    assert!(matches!(outcome, ActionOutcome::Failed(_)));
    assert_eq!(
        h.notifier.toasts(),
        vec![Toast::Error("Login failed, please try again".to_string())]
    );
}
