//! Routing error page

use crate::app::Route;
use jobtrack_frontend_common::{ErrorView, RouteError};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    pub error: RouteError,
}

/// Route for the "back" link, when it can be followed without a reload
fn back_link(link_to: &str, in_router: bool) -> Option<Route> {
    Route::recognize(link_to).filter(|route| in_router && *route != Route::NotFound)
}

#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    // Outside the router (startup failure) there is no history to push onto.
    let in_router = use_navigator().is_some();

    tracing::debug!(status = ?props.error.status, message = %props.error.message, "rendering error page");

    match ErrorView::from_error(&props.error) {
        ErrorView::NotFound {
            title,
            text,
            link_to,
            link_label,
        } => {
            let link = match back_link(link_to, in_router) {
                Some(route) => html! {
                    <Link<Route> to={route}>{ link_label }</Link<Route>>
                },
                _ => html! { <a href={link_to}>{ link_label }</a> },
            };
            html! {
                <main class="full-page error-page">
                    <h3>{ title }</h3>
                    <p>{ text }</p>
                    { link }
                </main>
            }
        }
        ErrorView::Generic { title } => html! {
            <main class="full-page error-page">
                <h3>{ title }</h3>
            </main>
        },
    }
}
