use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod api;
mod quote {
    pub mod draft;
    pub mod wizard;
}
mod components {
    pub mod footer;
    pub mod hero;
    pub mod newsletter;
    pub mod services;
}
mod pages {
    pub mod home;
    pub mod unsubscribe;
}

use pages::{home::Home, unsubscribe::Unsubscribe};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/unsubscribe")]
    Unsubscribe,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Unsubscribe => {
            info!("Rendering Unsubscribe page");
            html! { <Unsubscribe /> }
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

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
