use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #000; color: #ff3e3e; font-family: 'Orbitron', sans-serif;">
            <h1>{"404"}</h1>
            <p style="color: #fff;">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
        </div>
    }
}
