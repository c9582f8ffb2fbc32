use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod brand;
mod config;
mod contact;
mod first_visit;
mod growth;
mod storage;
mod content {
    pub mod loader;
    pub mod mock;
    pub mod models;
}
mod components {
    pub mod carousel;
    pub mod contact_form;
    pub mod dishes;
    pub mod header;
    pub mod music;
    pub mod notification;
    pub mod reviews;
    pub mod sections;
    pub mod special_dialog;
}
mod pages {
    pub mod home;
}

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
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{format!("Back to {}", brand::NAME)}</Link<Route>>
                </div>
            }
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
