//! Router-facing contracts: paths, loader results, action results

use jobtrack_http::ClientError;

/// Public landing page
pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Root of the guarded area
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Result of a route loader: data for the route, or somewhere else to go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loader<T> {
    Data(T),
    Redirect(String),
}

impl<T> Loader<T> {
    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect(to.into())
    }

    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Redirect(_) => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Data(_) => None,
            Self::Redirect(to) => Some(to),
        }
    }
}

/// Result of a form action
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    Redirect(String),
    /// The action failed; the error is handed back for optional inline display
    Failed(ClientError),
}

impl ActionOutcome {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect(to) => Some(to),
            Self::Failed(_) => None,
        }
    }
}

/// Whether the router is settling a navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Idle,
    /// A loader for the next route is running
    Loading,
    /// A form action is running
    Submitting,
}
