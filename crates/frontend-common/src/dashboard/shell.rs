//! Guarded dashboard layout state
//!
//! A [`DashboardShell`] is mounted once the loader has produced a user. It is
//! the capability object nested routes receive: the user, the sidebar and
//! theme toggles, and logout. Mounting registers the shell's session expiry
//! interceptor on the HTTP client; logout (or dropping the last handle)
//! removes it again.

use super::links::{NAV_LINKS, NavLink};
use crate::auth::{AuthErrorFlag, SessionExpiryInterceptor};
use crate::cache::QueryClient;
use crate::platform::{Navigator, Notifier};
use crate::router::{NavigationState, ROOT_PATH};
use crate::theme::{Theme, ThemeSwitch};
use futures::future::{AbortHandle, FutureExt, abortable};
use jobtrack_http::{InterceptorHandle, JobtrackClient, UserSummary};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Everything the shell talks to
#[derive(Clone)]
pub struct ShellServices {
    pub client: JobtrackClient,
    pub queries: QueryClient,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
    pub theme: ThemeSwitch,
}

/// Layout state shared with every nested route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub show_sidebar: bool,
    pub is_dark_theme: bool,
}

/// Data handed to the route rendered in the outlet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutletContext {
    pub user: UserSummary,
}

/// What the content area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellContent {
    /// The next route's loader is still running
    Loading,
    Outlet,
}

struct Shell {
    user: UserSummary,
    ui: Cell<UiState>,
    services: ShellServices,
    auth_errors: Rc<AuthErrorFlag>,
    interceptor: RefCell<Option<InterceptorHandle>>,
    logged_out: Cell<bool>,
}

/// Stops a session expiry watcher started by
/// [`DashboardShell::watch_session_expiry`]
#[must_use = "dropping the handle leaves the watcher running"]
pub struct ExpiryWatch {
    auth_errors: Rc<AuthErrorFlag>,
    abort: AbortHandle,
}

impl ExpiryWatch {
    /// Stop watching, unless a forced logout is already under way
    ///
    /// Returns whether the watcher was stopped. A logout triggered by the
    /// flag navigates away first, which unmounts whatever owns this handle;
    /// that logout still has to invalidate the cache and toast, so it is left
    /// to finish.
    pub fn stop(self) -> bool {
        if self.auth_errors.is_raised() {
            tracing::debug!("forced logout in progress, watcher left running");
            return false;
        }
        self.abort.abort();
        true
    }
}

/// Handle onto the mounted dashboard; clones share state
#[derive(Clone)]
pub struct DashboardShell {
    inner: Rc<Shell>,
}

impl PartialEq for DashboardShell {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for DashboardShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardShell")
            .field("user", &self.inner.user.name)
            .field("ui", &self.inner.ui.get())
            .field("logged_out", &self.inner.logged_out.get())
            .finish_non_exhaustive()
    }
}

impl DashboardShell {
    /// Mount the shell for `user`, starting from the stored theme preference
    pub fn mount(user: UserSummary, is_dark_theme_enabled: bool, services: ShellServices) -> Self {
        let auth_errors = Rc::new(AuthErrorFlag::new());
        let interceptor = services
            .client
            .interceptors()
            .register(Rc::new(SessionExpiryInterceptor::new(auth_errors.clone())));

        tracing::debug!(user = %user.name, "dashboard mounted");

        Self {
            inner: Rc::new(Shell {
                user,
                ui: Cell::new(UiState {
                    show_sidebar: false,
                    is_dark_theme: is_dark_theme_enabled,
                }),
                services,
                auth_errors,
                interceptor: RefCell::new(Some(interceptor)),
                logged_out: Cell::new(false),
            }),
        }
    }

    pub fn user(&self) -> &UserSummary {
        &self.inner.user
    }

    pub fn outlet_context(&self) -> OutletContext {
        OutletContext {
            user: self.inner.user.clone(),
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.inner.ui.get()
    }

    pub fn show_sidebar(&self) -> bool {
        self.inner.ui.get().show_sidebar
    }

    pub fn toggle_sidebar(&self) {
        let mut ui = self.inner.ui.get();
        ui.show_sidebar = !ui.show_sidebar;
        self.inner.ui.set(ui);
    }

    pub fn is_dark_theme(&self) -> bool {
        self.inner.ui.get().is_dark_theme
    }

    /// Flip the theme, update the body class and persist the choice
    pub fn toggle_dark_theme(&self) {
        let mut ui = self.inner.ui.get();
        ui.is_dark_theme = !ui.is_dark_theme;
        self.inner.ui.set(ui);
        self.inner.services.theme.set(Theme::from_dark(ui.is_dark_theme));
    }

    pub fn nav_links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    /// The content area shows a placeholder while the router loads the next
    /// nested route
    pub fn content(&self, navigation: NavigationState) -> ShellContent {
        match navigation {
            NavigationState::Loading => ShellContent::Loading,
            NavigationState::Idle | NavigationState::Submitting => ShellContent::Outlet,
        }
    }

    /// Whether the session expiry signal has fired and not yet been handled
    pub fn session_expired(&self) -> bool {
        self.inner.auth_errors.is_raised()
    }

    /// Log out optimistically
    ///
    /// The navigation to `/` is issued before the backend is contacted, so
    /// the dashboard is never visible mid-logout. A failed logout request is
    /// logged and dropped; the cache is invalidated and the toast shown
    /// either way.
    pub async fn logout_user(&self) {
        let shell = &self.inner;
        shell.logged_out.set(true);
        shell.services.navigator.navigate(ROOT_PATH);

        // The session is over; a 401 from the logout call itself must not
        // come back around as another logout.
        drop(shell.interceptor.borrow_mut().take());

        if let Err(error) = shell.services.client.logout().await {
            tracing::warn!(%error, "logout request failed, ignoring");
        }

        shell.services.queries.invalidate_all();
        tracing::info!(user = %shell.user.name, "logged out");
        shell.services.notifier.success("Logging out...");
    }

    /// Wait for the backend to reject the session, then log out once
    pub async fn logout_on_session_expiry(&self) {
        self.inner.auth_errors.raised().await;
        if !self.inner.logged_out.get() {
            self.logout_user().await;
        }
        self.inner.auth_errors.clear();
    }

    /// [`logout_on_session_expiry`](Self::logout_on_session_expiry) as a
    /// detachable task, plus the handle that stops it on unmount
    ///
    /// The future resolves when the forced logout has completed or the
    /// watcher was stopped.
    pub fn watch_session_expiry(&self) -> (impl Future<Output = ()> + 'static, ExpiryWatch) {
        let shell = self.clone();
        let (watch, abort) = abortable(async move { shell.logout_on_session_expiry().await });
        let handle = ExpiryWatch {
            auth_errors: self.inner.auth_errors.clone(),
            abort,
        };
        (watch.map(|_| ()), handle)
    }
}
