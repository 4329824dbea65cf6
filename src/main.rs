use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod error;
mod form;
mod hooks;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod icon;
    pub mod navbar;
    pub mod reviews;
    pub mod services;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, navbar::Navbar};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="App">
                <Navbar />
                <Switch<Route> render={switch} />
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Lambert Brothers site");
    yew::Renderer::<App>::new().render();
}
