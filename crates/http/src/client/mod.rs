//! Jobtrack HTTP client

pub mod auth;
pub mod error;
pub mod interceptor;

use error::ClientError;
use interceptor::InterceptorChain;
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Jobtrack API client
///
/// Clones share the underlying connection pool, cookie jar and interceptor
/// chain.
#[derive(Clone)]
pub struct JobtrackClient {
    client: Client,
    base_url: String,
    interceptors: InterceptorChain,
}

impl JobtrackClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> JobtrackClientBuilder {
        JobtrackClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Interceptors observing every response of this client and its clones
    pub fn interceptors(&self) -> &InterceptorChain {
        &self.interceptors
    }

    /// Create a request builder carrying the session credentials
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(method, url);

        // The session cookie is only sent cross-origin when asked for.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    /// Execute a request and decode its JSON body
    ///
    /// Interceptors hear about success only once the body has decoded.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = match self.send(request).await {
            Ok(response) => {
                let status = response.status();
                response
                    .json::<T>()
                    .await
                    .map(|body| (status, body))
                    .map_err(ClientError::from)
            }
            Err(error) => Err(error),
        };
        self.report(result)
    }

    /// Execute a request whose response body carries nothing of interest
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let result = self
            .send(request)
            .await
            .map(|response| (response.status(), ()));
        self.report(result)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_status(status, body))
        }
    }

    fn report<T>(&self, result: Result<(StatusCode, T), ClientError>) -> Result<T, ClientError> {
        match result {
            Ok((status, value)) => {
                self.interceptors.notify_success(status);
                Ok(value)
            }
            Err(error) => {
                self.interceptors.notify_error(&error);
                Err(error)
            }
        }
    }
}

/// Builder for JobtrackClient
#[derive(Default)]
pub struct JobtrackClientBuilder {
    base_url: Option<String>,
}

impl JobtrackClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<JobtrackClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut client_builder = ClientBuilder::new();

        // The browser owns cookies and the user agent on wasm.
        #[cfg(not(target_arch = "wasm32"))]
        {
            client_builder = client_builder
                .cookie_store(true)
                .user_agent(concat!("jobtrack-client/", env!("CARGO_PKG_VERSION")));
        }

        let client = client_builder.build()?;

        Ok(JobtrackClient {
            client,
            base_url,
            interceptors: InterceptorChain::default(),
        })
    }
}
