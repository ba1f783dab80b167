//! Pages rendered in the dashboard outlet
//!
//! Placeholders for the job pages; each reads the signed-in user from the
//! outlet context.

use jobtrack_frontend_common::OutletContext;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    title: AttrValue,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    let outlet = use_context::<OutletContext>();

    html! {
        <section class="dashboard-section">
            <h3>{ &props.title }</h3>
            if let Some(OutletContext { user }) = outlet {
                <p>{ format!("Signed in as {}", user.name) }</p>
            }
        </section>
    }
}

#[function_component(AddJob)]
pub fn add_job() -> Html {
    html! { <Placeholder title="add job" /> }
}

#[function_component(AllJobs)]
pub fn all_jobs() -> Html {
    html! { <Placeholder title="all jobs" /> }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! { <Placeholder title="stats" /> }
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let outlet = use_context::<OutletContext>();

    html! {
        <section class="dashboard-section">
            <h3>{"profile"}</h3>
            if let Some(OutletContext { user }) = outlet {
                <dl>
                    <dt>{"name"}</dt>
                    <dd>{ &user.name }</dd>
                    <dt>{"last name"}</dt>
                    <dd>{ user.last_name.clone().unwrap_or_default() }</dd>
                    <dt>{"email"}</dt>
                    <dd>{ user.email.clone().unwrap_or_default() }</dd>
                    <dt>{"location"}</dt>
                    <dd>{ user.location.clone().unwrap_or_default() }</dd>
                </dl>
            }
        </section>
    }
}
