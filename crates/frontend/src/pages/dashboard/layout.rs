//! Guarded dashboard layout
//!
//! Runs the session loader on mount and on every nested navigation, mounts a
//! [`DashboardShell`] for the loaded user and watches for session expiry while
//! the shell is alive.

use crate::app::{DashboardRoute, current_path, switch_dashboard};
use crate::components::{LoadingSpinner, Navbar, Sidebar};
use crate::pages::ErrorPage;
use crate::platform::RouterNavigator;
use crate::services::use_services;
use jobtrack_frontend_common::platform::Navigator;
use jobtrack_frontend_common::{
    DashboardShell, Loader, NavigationState, OutletContext, RouteError, ShellContent,
    check_default_theme, dashboard_loader,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardLayout)]
pub fn dashboard_layout() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let route = use_route::<DashboardRoute>();
    let shell = use_state_eq(|| None::<DashboardShell>);
    let navigation = use_state_eq(|| NavigationState::Loading);
    let redraw = use_force_update();

    let unknown_route = matches!(route, None | Some(DashboardRoute::NotFound));

    // Session guard
    {
        let shell = shell.clone();
        let navigation = navigation.clone();
        use_effect_with(route, move |_| {
            let Some(navigator) = navigator.filter(|_| !unknown_route) else {
                return;
            };
            navigation.set(NavigationState::Loading);

            spawn_local(async move {
                match dashboard_loader(&services.client, &services.queries).await {
                    Loader::Data(user) => {
                        if shell.is_none() {
                            let is_dark_theme_enabled = check_default_theme(&services.theme);
                            shell.set(Some(DashboardShell::mount(
                                user,
                                is_dark_theme_enabled,
                                services.shell_services(navigator),
                            )));
                        }
                        navigation.set(NavigationState::Idle);
                    }
                    Loader::Redirect(to) => RouterNavigator(navigator).navigate(&to),
                }
            });
        });
    }

    // Session expiry watcher, stopped when the shell goes away
    use_effect_with((*shell).clone(), |shell| {
        let watch = shell.as_ref().map(|shell| {
            let (watcher, watch) = shell.watch_session_expiry();
            spawn_local(watcher);
            watch
        });
        move || {
            if let Some(watch) = watch {
                watch.stop();
            }
        }
    });

    if unknown_route {
        return html! { <ErrorPage error={RouteError::not_found(&current_path())} /> };
    }

    let Some(shell) = (*shell).clone() else {
        return html! { <LoadingSpinner text="Checking your session..." /> };
    };

    let on_toggle_sidebar = {
        let shell = shell.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            shell.toggle_sidebar();
            redraw.force_update();
        })
    };

    let on_toggle_theme = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| {
            shell.toggle_dark_theme();
            redraw.force_update();
        })
    };

    let on_logout = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| {
            let shell = shell.clone();
            spawn_local(async move { shell.logout_user().await });
        })
    };

    let content = match shell.content(*navigation) {
        ShellContent::Loading => html! { <LoadingSpinner /> },
        ShellContent::Outlet => html! {
            <ContextProvider<OutletContext> context={shell.outlet_context()}>
                <Switch<DashboardRoute> render={switch_dashboard} />
            </ContextProvider<OutletContext>>
        },
    };

    html! {
        <main class="dashboard">
            <Sidebar
                links={shell.nav_links()}
                ui={shell.ui_state()}
                on_toggle_sidebar={on_toggle_sidebar.clone()}
            />
            <div>
                <Navbar
                    user_name={shell.user().name.clone()}
                    ui={shell.ui_state()}
                    {on_toggle_sidebar}
                    {on_toggle_theme}
                    {on_logout}
                />
                <div class="dashboard-page">{ content }</div>
            </div>
        </main>
    }
}
