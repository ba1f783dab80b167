//! Session endpoints

use super::{ClientError, JobtrackClient};
use crate::types::{LoginRequest, Session};
use reqwest::Method;

impl JobtrackClient {
    /// Fetch the session of the current visitor
    pub async fn current_user(&self) -> Result<Session, ClientError> {
        let request = self.request(Method::GET, "/users/current-user");
        self.execute(request).await
    }

    /// Log in; the backend answers by setting the session cookie
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute_empty(request).await
    }

    /// End the session on the backend
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(Method::GET, "/auth/logout");
        self.execute_empty(request).await
    }
}
