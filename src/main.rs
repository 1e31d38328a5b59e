use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod tracker {
    pub mod browser;
    pub mod observer;
    pub mod policy;
    pub mod registry;
}
mod components {
    pub mod contact_form;
    pub mod nav;
    pub mod scene;
}
mod pages {
    pub mod not_found;
    pub mod site;
}

use pages::{not_found::NotFound, site::SitePage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/slate")]
    Slate,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering crimson page");
            html! { <SitePage variant={config::variant_or_fallback(config::DEFAULT_VARIANT)} /> }
        }
        Route::Slate => {
            info!("Rendering slate page");
            html! { <SitePage variant={config::variant_or_fallback("slate")} /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
