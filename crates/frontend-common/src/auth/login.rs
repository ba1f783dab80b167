//! Login form action and the demo login shortcut

use super::error_messages::login_error_message;
use crate::cache::QueryClient;
use crate::config::AppConfig;
use crate::platform::{Navigator, Notifier};
use crate::router::{ActionOutcome, DASHBOARD_PATH};
use jobtrack_http::{JobtrackClient, LoginRequest};

/// Submit the login form
///
/// On success every cached query is dropped, so the dashboard guard refetches
/// the session of the user who just signed in.
pub async fn login_action(
    client: &JobtrackClient,
    queries: &QueryClient,
    notifier: &dyn Notifier,
    credentials: LoginRequest,
) -> ActionOutcome {
    match client.login(&credentials).await {
        Ok(()) => {
            queries.invalidate_all();
            tracing::info!("logged in");
            notifier.success("Login successful");
            ActionOutcome::Redirect(DASHBOARD_PATH.to_string())
        }
        Err(error) => {
            tracing::debug!(%error, "login rejected");
            notifier.error(&login_error_message(&error));
            ActionOutcome::Failed(error)
        }
    }
}

/// Sign in with the demo account and go straight to the dashboard
pub async fn login_demo_user(
    client: &JobtrackClient,
    queries: &QueryClient,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
    config: &AppConfig,
) {
    let credentials = LoginRequest {
        email: config.demo_email.clone(),
        password: config.demo_password.clone(),
    };

    match client.login(&credentials).await {
        Ok(()) => {
            queries.invalidate_all();
            tracing::info!("logged in as demo user");
            notifier.success("Take a test drive!");
            navigator.navigate(DASHBOARD_PATH);
        }
        Err(error) => {
            tracing::info!(%error, "demo login rejected");
            notifier.error(&login_error_message(&error));
        }
    }
}
