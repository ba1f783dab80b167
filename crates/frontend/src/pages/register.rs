use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Register)]
pub fn register() -> Html {
    html! {
        <section class="full-page">
            <div class="form">
                <h4>{"Register"}</h4>
                <p>{"Registration is not open yet."}</p>
                <p>
                    {"Already a member? "}
                    <Link<Route> to={Route::Login} classes="member-btn">{"Login"}</Link<Route>>
                </p>
            </div>
        </section>
    }
}
