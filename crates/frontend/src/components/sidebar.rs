//! Dashboard navigation
//!
//! The small sidebar is an overlay opened from the navbar; following one of
//! its links closes it again. The big sidebar is always rendered and only
//! collapses through CSS.

use crate::app::DashboardRoute;
use jobtrack_frontend_common::UiState;
use jobtrack_frontend_common::dashboard::NavLink;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub links: &'static [NavLink],
    pub ui: UiState,
    pub on_toggle_sidebar: Callback<MouseEvent>,
}

fn nav_links(links: &[NavLink], on_click: Option<&Callback<MouseEvent>>) -> Html {
    links
        .iter()
        .filter_map(|link| Some((link, DashboardRoute::recognize(link.path)?)))
        .map(|(link, route)| {
            html! {
                <span class="nav-link" onclick={on_click.cloned()}>
                    <Link<DashboardRoute> to={route}>{ link.text }</Link<DashboardRoute>>
                </span>
            }
        })
        .collect()
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let small_class = classes!(
        "sidebar-container",
        props.ui.show_sidebar.then_some("show-sidebar")
    );
    let big_class = classes!(
        "big-sidebar",
        (!props.ui.show_sidebar).then_some("show-big-sidebar")
    );

    html! {
        <>
            <aside class={small_class}>
                <div class="small-sidebar content">
                    <button type="button" class="close-btn" onclick={props.on_toggle_sidebar.clone()}>
                        {"×"}
                    </button>
                    <div class="nav-links">
                        { nav_links(props.links, Some(&props.on_toggle_sidebar)) }
                    </div>
                </div>
            </aside>
            <aside class={big_class}>
                <div class="sidebar-content">
                    <div class="nav-links">
                        { nav_links(props.links, None) }
                    </div>
                </div>
            </aside>
        </>
    }
}
