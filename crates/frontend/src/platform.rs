//! Browser implementations of the shell's platform capabilities

use crate::app::{DashboardRoute, Route};
use jobtrack_frontend_common::platform::{
    BodyClassList, KeyValueStore, Navigator, Notifier, StorageError,
};
use web_sys::Storage;
use yew::prelude::*;
use yew_router::Routable;

use crate::components::toast::{ToastAction, ToastKind, ToastList};

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// `document.body.classList`
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentBody;

impl BodyClassList for DocumentBody {
    fn toggle_class(&self, class: &str, force: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        if let Err(error) = body.class_list().toggle_with_force(class, force) {
            tracing::warn!(?error, class, "failed to toggle body class");
        }
    }
}

/// Pushes paths onto the router's history
pub struct RouterNavigator(pub yew_router::navigator::Navigator);

/// Where a path lands: a dashboard page, or a top-level route
#[derive(Debug, PartialEq, Eq)]
enum Target {
    Dashboard(DashboardRoute),
    Top(Route),
}

fn target_for(path: &str) -> Target {
    match DashboardRoute::recognize(path) {
        Some(route) if route != DashboardRoute::NotFound => Target::Dashboard(route),
        _ => Target::Top(Route::recognize(path).unwrap_or(Route::NotFound)),
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, to: &str) {
        match target_for(to) {
            Target::Dashboard(route) => self.0.push(&route),
            Target::Top(route) => self.0.push(&route),
        }
    }
}

/// Feeds the toast surface
pub struct ToastNotifier(pub UseReducerDispatcher<ToastList>);

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.0
            .dispatch(ToastAction::Push(ToastKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.0
            .dispatch(ToastAction::Push(ToastKind::Error, message.to_string()));
    }
}
