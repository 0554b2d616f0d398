use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod confetti;
mod countdown;
mod subscribe;
mod components {
    pub mod toast;
}
mod pages {
    pub mod coming_soon;
}

use pages::coming_soon::ComingSoon;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering coming soon page");
            html! { <ComingSoon /> }
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
