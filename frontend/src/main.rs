use yew::prelude::*;

mod components;
mod config;
mod order;
mod pages;
mod router;
mod utils;

use components::footer::Footer;
use components::navigation::NavBar;
use pages::{
    about::About, contact::Contact, home::Home, order::Order, portfolio::Portfolio,
    pricing::Pricing, services::Services,
};
use router::{Navigation, NavigatorContext, PageId};

fn render_page(page: PageId) -> Html {
    match page {
        PageId::Home => html! { <Home /> },
        PageId::Services => html! { <Services /> },
        PageId::Portfolio => html! { <Portfolio /> },
        PageId::Pricing => html! { <Pricing /> },
        PageId::Order => html! { <Order /> },
        PageId::About => html! { <About /> },
        PageId::Contact => html! { <Contact /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let navigation = use_reducer(Navigation::default);
    let current = navigation.current_page();

    // Every navigation starts at the top of the viewport, even onto the same page.
    use_effect_with_deps(
        move |_| {
            utils::browser::scroll_to_top();
            || ()
        },
        navigation.visit(),
    );

    html! {
        <ContextProvider<NavigatorContext> context={NavigatorContext::new(navigation)}>
            <div class="app-shell">
                <NavBar />
                <main class="main-content">
                    { render_page(current) }
                </main>
                <Footer />
            </div>
        </ContextProvider<NavigatorContext>>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("starting {}", config::SiteConfig::get().brand);
    yew::Renderer::<App>::new().render();
}
