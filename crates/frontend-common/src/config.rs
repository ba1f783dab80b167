//! Frontend configuration

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Durable storage key for the dark theme preference
    pub const DARK_THEME_KEY: &'static str = "darkTheme";

    /// Body class applied while the dark theme is active
    pub const DARK_THEME_CLASS: &'static str = "dark-theme";

    /// API prefix appended to the page origin
    pub const API_PREFIX: &'static str = "/api/v1";

    /// How long a fetched session is trusted before the guard refetches it
    pub const SESSION_STALE_SECS: i64 = 5 * 60;
}

/// Runtime configuration of the dashboard client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the backend API, without trailing slash
    pub api_base_url: String,
    /// Credentials used by the "explore the app" button
    pub demo_email: String,
    pub demo_password: String,
    /// Seconds a cached session stays fresh; `None` keeps it until invalidated
    pub session_stale_secs: Option<i64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: AuthConfig::API_PREFIX.to_string(),
            demo_email: "test@test.com".to_string(),
            demo_password: "secret123".to_string(),
            session_stale_secs: Some(AuthConfig::SESSION_STALE_SECS),
        }
    }
}

impl AppConfig {
    /// Configuration for an app served from `origin`
    pub fn for_origin(origin: &str) -> Self {
        Self {
            api_base_url: format!("{}{}", origin.trim_end_matches('/'), AuthConfig::API_PREFIX),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration document; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn session_stale_time(&self) -> Option<TimeDelta> {
        self.session_stale_secs.and_then(TimeDelta::try_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_gets_api_prefix() {
        let config = AppConfig::for_origin("https://jobs.example.com/");
        assert_eq!(config.api_base_url, "https://jobs.example.com/api/v1");
        assert_eq!(config.demo_email, "test@test.com");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "session_stale_secs": null }"#).unwrap();
        assert_eq!(config.session_stale_time(), None);
        assert_eq!(config.demo_password, "secret123");

        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.session_stale_time(), TimeDelta::try_minutes(5));
    }
}
