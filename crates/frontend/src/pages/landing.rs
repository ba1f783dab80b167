use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing">
            <nav><span class="logo">{"Jobtrack"}</span></nav>
            <div class="container page">
                <h1>{"Job "}<span>{"tracking"}</span>{" app"}</h1>
                <p>{"Keep every application, interview and offer in one place."}</p>
                <Link<Route> to={Route::Register} classes="btn register-link">{"Register"}</Link<Route>>
                <Link<Route> to={Route::Login} classes="btn">{"Login / Demo User"}</Link<Route>>
            </div>
        </main>
    }
}
