//! Dashboard top bar

use jobtrack_frontend_common::UiState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub user_name: AttrValue,
    pub ui: UiState,
    pub on_toggle_sidebar: Callback<MouseEvent>,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let show_logout = use_state(|| false);

    let on_toggle_logout = {
        let show_logout = show_logout.clone();
        Callback::from(move |_: MouseEvent| show_logout.set(!*show_logout))
    };

    html! {
        <nav class="navbar">
            <div class="nav-center">
                <button type="button" class="toggle-btn" onclick={props.on_toggle_sidebar.clone()}>
                    {"☰"}
                </button>
                <h4 class="logo-text">{"dashboard"}</h4>
                <div class="btn-container">
                    <button type="button" class="theme-toggle" onclick={props.on_toggle_theme.clone()}>
                        { if props.ui.is_dark_theme { "light" } else { "dark" } }
                    </button>
                    <div class="logout-container">
                        <button type="button" class="btn logout-btn" onclick={on_toggle_logout}>
                            { &props.user_name }
                        </button>
                        if *show_logout {
                            <div class="dropdown show-dropdown">
                                <button type="button" class="dropdown-btn" onclick={props.on_logout.clone()}>
                                    {"logout"}
                                </button>
                            </div>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
