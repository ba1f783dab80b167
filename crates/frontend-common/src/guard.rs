//! Loader guarding the dashboard routes
//!
//! Runs before any `/dashboard` route renders. The session comes from the
//! query cache, which only hits `GET /users/current-user` on a miss. Every
//! failure turns into a redirect to the public root, so the protected tree
//! never renders without a user.

use crate::cache::{QueryClient, QueryKey};
use crate::router::{Loader, ROOT_PATH};
use jobtrack_http::{ClientError, JobtrackClient, Session, UserSummary};

/// Session of the current visitor, from the cache or the backend
pub async fn current_user_query(
    client: &JobtrackClient,
    queries: &QueryClient,
) -> Result<Session, ClientError> {
    let client = client.clone();
    queries
        .fetch_query(QueryKey::current_user(), move || async move {
            client.current_user().await
        })
        .await
}

/// Resolve the signed-in user or redirect to `/`
pub async fn dashboard_loader(client: &JobtrackClient, queries: &QueryClient) -> Loader<UserSummary> {
    match current_user_query(client, queries).await {
        Ok(Session { user: Some(user) }) => Loader::Data(user),
        Ok(Session { user: None }) => {
            tracing::debug!("no user in session, redirecting");
            Loader::redirect(ROOT_PATH)
        }
        Err(error) => {
            tracing::debug!(%error, "session check failed, redirecting");
            Loader::redirect(ROOT_PATH)
        }
    }
}
