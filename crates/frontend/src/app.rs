use crate::components::ToastContainer;
use crate::components::toast::ToastList;
use crate::pages::{
    AddJob, AllJobs, DashboardLayout, ErrorPage, Landing, Login, Profile, Register, Stats,
};
use crate::services::AppContext;
use jobtrack_frontend_common::RouteError;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    DashboardRoot,
    #[at("/dashboard/*")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Routes rendered inside the dashboard layout
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum DashboardRoute {
    #[at("/dashboard")]
    AddJob,
    #[at("/dashboard/all-jobs")]
    AllJobs,
    #[at("/dashboard/stats")]
    Stats,
    #[at("/dashboard/profile")]
    Profile,
    #[not_found]
    #[at("/dashboard/404")]
    NotFound,
}

/// Path the browser is currently showing
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::Register => html! { <Register /> },
        Route::Login => html! { <Login /> },
        Route::DashboardRoot | Route::Dashboard => html! { <DashboardLayout /> },
        Route::NotFound => html! { <ErrorPage error={RouteError::not_found(&current_path())} /> },
    }
}

pub fn switch_dashboard(route: DashboardRoute) -> Html {
    match route {
        DashboardRoute::AddJob => html! { <AddJob /> },
        DashboardRoute::AllJobs => html! { <AllJobs /> },
        DashboardRoute::Stats => html! { <Stats /> },
        DashboardRoute::Profile => html! { <Profile /> },
        DashboardRoute::NotFound => {
            html! { <ErrorPage error={RouteError::not_found(&current_path())} /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_reducer(ToastList::default);
    let services = {
        let dispatcher = toasts.dispatcher();
        use_memo((), move |_| AppContext::new(dispatcher))
    };

    let body = match &*services {
        Ok(services) => html! {
            <ContextProvider<AppContext> context={services.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<AppContext>>
        },
        Err(error) => {
            tracing::error!(%error, "failed to start");
            html! {
                <ErrorPage error={RouteError { status: None, message: error.to_string() }} />
            }
        }
    };

    html! {
        <>
            { body }
            <ToastContainer toasts={toasts} />
        </>
    }
}
