//! Login form and the demo user shortcut

use crate::app::Route;
use crate::components::LoadingSpinner;
use crate::platform::RouterNavigator;
use crate::services::use_services;
use jobtrack_frontend_common::platform::Navigator;
use jobtrack_frontend_common::{NavigationState, login_action, login_demo_user};
use jobtrack_http::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let navigation = use_state_eq(NavigationState::default);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let services = services.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let navigation = navigation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let services = services.clone();
            let navigator = navigator.clone();
            let navigation = navigation.clone();
            let credentials = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };

            navigation.set(NavigationState::Submitting);
            spawn_local(async move {
                let outcome = login_action(
                    &services.client,
                    &services.queries,
                    services.notifier.as_ref(),
                    credentials,
                )
                .await;
                navigation.set(NavigationState::Idle);

                if let (Some(to), Some(navigator)) = (outcome.redirect_target(), navigator) {
                    RouterNavigator(navigator).navigate(to);
                }
            });
        })
    };

    let on_demo = {
        let services = services.clone();
        let navigator = navigator.clone();
        let navigation = navigation.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = navigator.clone() else {
                tracing::error!("demo login requested outside the router");
                return;
            };
            let services = services.clone();
            let navigation = navigation.clone();

            navigation.set(NavigationState::Submitting);
            spawn_local(async move {
                login_demo_user(
                    &services.client,
                    &services.queries,
                    services.notifier.as_ref(),
                    &RouterNavigator(navigator),
                    &services.config,
                )
                .await;
                navigation.set(NavigationState::Idle);
            });
        })
    };

    let submitting = *navigation == NavigationState::Submitting;

    html! {
        <section class="full-page">
            <form class="form" onsubmit={on_submit}>
                <h4>{"Login"}</h4>
                <div class="form-row">
                    <label for="email" class="form-label">{"email"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        class="form-input"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                </div>
                <div class="form-row">
                    <label for="password" class="form-label">{"password"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        class="form-input"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                </div>
                <button type="submit" class="btn btn-block" disabled={submitting}>
                    { if submitting { "submitting..." } else { "submit" } }
                </button>
                <button type="button" class="btn btn-block" onclick={on_demo} disabled={submitting}>
                    {"explore the app"}
                </button>
                if submitting {
                    <LoadingSpinner />
                }
                <p>
                    {"Not a member yet? "}
                    <Link<Route> to={Route::Register} classes="member-btn">{"Register"}</Link<Route>>
                </p>
            </form>
        </section>
    }
}
