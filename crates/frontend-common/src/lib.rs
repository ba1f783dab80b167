//! Framework-independent core of the jobtrack dashboard client
//!
//! Route guard, dashboard shell state, session expiry handling, login
//! actions and theme persistence. Host capabilities (navigation, toasts,
//! storage, the document body) come in through the traits in [`platform`].

pub mod auth;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error_page;
pub mod guard;
pub mod platform;
pub mod router;
pub mod theme;

#[cfg(test)]
mod tests;

pub use auth::{AuthErrorFlag, SessionExpiryInterceptor, login_action, login_demo_user};
pub use cache::{QueryClient, QueryKey};
pub use config::{AppConfig, AuthConfig};
pub use dashboard::{DashboardShell, ExpiryWatch, OutletContext, ShellContent, ShellServices, UiState};
pub use error_page::{ErrorView, RouteError};
pub use guard::{current_user_query, dashboard_loader};
pub use router::{ActionOutcome, Loader, NavigationState};
pub use theme::{Theme, ThemeSwitch, check_default_theme};
