use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod seo;
mod decorations {
    pub mod placement;
    pub mod palette;
    pub mod config;
    pub mod overlay;
    pub mod board;
    pub mod driver;
    pub mod layer;
}
mod components {
    pub mod reveal;
    pub mod header;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod portfolio;
    pub mod testimonials;
    pub mod blog;
    pub mod contact;
    pub mod footer;
    pub mod scroll_to_top;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
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
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
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
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        gloo_console::error!(format!("error initializing log: {e}"));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
