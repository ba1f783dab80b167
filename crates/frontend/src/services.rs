//! Application-wide services, shared with every page through context

use crate::components::toast::ToastList;
use crate::platform::{DocumentBody, LocalStorage, RouterNavigator, ToastNotifier};
use jobtrack_frontend_common::{AppConfig, QueryClient, ShellServices, ThemeSwitch, check_default_theme};
use jobtrack_http::{ClientError, JobtrackClient};
use std::rc::Rc;
use yew::prelude::*;

pub struct AppServices {
    pub config: AppConfig,
    pub client: JobtrackClient,
    pub queries: QueryClient,
    pub theme: ThemeSwitch,
    pub notifier: Rc<ToastNotifier>,
}

/// Cheap handle onto the [`AppServices`]
#[derive(Clone)]
pub struct AppContext(Rc<AppServices>);

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for AppContext {
    type Target = AppServices;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppContext {
    /// Build the services for the page's origin and apply the stored theme
    pub fn new(toasts: UseReducerDispatcher<ToastList>) -> Result<Self, ClientError> {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let config = AppConfig::for_origin(&origin);
        let client = JobtrackClient::new(config.api_base_url.clone())?;
        let queries = QueryClient::new(config.session_stale_time());
        let theme = ThemeSwitch::new(Rc::new(LocalStorage), Rc::new(DocumentBody));

        let dark = check_default_theme(&theme);
        tracing::debug!(api = %config.api_base_url, dark, "services ready");

        Ok(Self(Rc::new(AppServices {
            config,
            client,
            queries,
            theme,
            notifier: Rc::new(ToastNotifier(toasts)),
        })))
    }

    /// Services for a dashboard shell navigating through `navigator`
    pub fn shell_services(&self, navigator: yew_router::navigator::Navigator) -> ShellServices {
        ShellServices {
            client: self.client.clone(),
            queries: self.queries.clone(),
            navigator: Rc::new(RouterNavigator(navigator)),
            notifier: self.notifier.clone(),
            theme: self.theme.clone(),
        }
    }
}

/// Hook to access the application services
#[hook]
pub fn use_services() -> AppContext {
    use_context::<AppContext>()
        .expect("Services not found. Make sure the page is rendered inside App")
}
