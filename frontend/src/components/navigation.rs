use yew::prelude::*;

use crate::config::SiteConfig;
use crate::router::{use_navigator, PageId, NAV_LINKS};

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let nav = use_navigator();
    let menu_open = use_state(|| false);
    let current = nav.current_page();

    // Every navigation from the bar also folds the mobile menu.
    let go = |target: PageId| {
        let nav = nav.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            nav.navigate(target);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|page| {
                html! {
                    <button
                        key={page.as_str()}
                        class={classes!(
                            "nav-link",
                            mobile.then_some("mobile"),
                            (*page == current).then_some("active"),
                        )}
                        onclick={go(*page)}
                    >
                        {page.label()}
                        <span class="nav-underline"></span>
                    </button>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class="top-nav">
            <div class="nav-inner">
                <div class="nav-brand" onclick={go(PageId::Home)}>
                    <h1>{SiteConfig::get().brand}</h1>
                </div>
                <div class="nav-links desktop-only">
                    { links(false) }
                </div>
                <div class="desktop-only">
                    <button class="order-now-button" onclick={go(PageId::Order)}>
                        {"Order Now"}
                    </button>
                </div>
                <button class="menu-toggle mobile-only" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu mobile-only">
                    { links(true) }
                    <button class="order-now-button mobile" onclick={go(PageId::Order)}>
                        {"Order Now"}
                    </button>
                </div>
            }
        </nav>
    }
}
