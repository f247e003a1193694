use std::fmt;
use std::rc::Rc;
use yew::prelude::*;

/// Pages of the site. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Home,
    Services,
    Portfolio,
    Pricing,
    Order,
    About,
    Contact,
}

/// Entries shown in the navigation bar, in display order. The order page is
/// reached through the separate "Order Now" button.
pub const NAV_LINKS: [PageId; 6] = [
    PageId::Home,
    PageId::Services,
    PageId::Portfolio,
    PageId::Pricing,
    PageId::About,
    PageId::Contact,
];

impl PageId {
    #[cfg(test)]
    pub const ALL: [PageId; 7] = [
        PageId::Home,
        PageId::Services,
        PageId::Portfolio,
        PageId::Pricing,
        PageId::Order,
        PageId::About,
        PageId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Services => "services",
            PageId::Portfolio => "portfolio",
            PageId::Pricing => "pricing",
            PageId::Order => "order",
            PageId::About => "about",
            PageId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Services => "Services",
            PageId::Portfolio => "Portfolio",
            PageId::Pricing => "Pricing",
            PageId::Order => "Order",
            PageId::About => "About",
            PageId::Contact => "Contact",
        }
    }

    /// Resolves a page identifier. Anything unrecognized lands on `Home`.
    #[cfg(test)]
    pub fn from_id(id: &str) -> PageId {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == id)
            .unwrap_or_default()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-wide navigation state. Lives as long as the app, never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigation {
    current: PageId,
    /// Bumped on every navigation, including to the page already shown.
    visit: u64,
}

impl Navigation {
    pub fn current_page(&self) -> PageId {
        self.current
    }

    pub fn visit(&self) -> u64 {
        self.visit
    }
}

impl Reducible for Navigation {
    type Action = PageId;

    fn reduce(self: Rc<Self>, target: PageId) -> Rc<Self> {
        log::debug!("navigate: {} -> {}", self.current, target);
        Rc::new(Navigation {
            current: target,
            visit: self.visit.wrapping_add(1),
        })
    }
}

/// Handle passed down the component tree through `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct NavigatorContext {
    state: UseReducerHandle<Navigation>,
}

impl NavigatorContext {
    pub fn new(state: UseReducerHandle<Navigation>) -> Self {
        Self { state }
    }

    /// Switches the active page unconditionally, including to itself.
    pub fn navigate(&self, target: PageId) {
        self.state.dispatch(target);
    }

    pub fn current_page(&self) -> PageId {
        self.state.current_page()
    }

    /// Click handler that navigates to `target`.
    pub fn link(&self, target: PageId) -> Callback<MouseEvent> {
        let nav = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.navigate(target);
        })
    }
}

#[hook]
pub fn use_navigator() -> NavigatorContext {
    let context = use_context::<NavigatorContext>();
    // Hooks can't be called conditionally, so the detached fallback always exists.
    let detached = use_reducer(Navigation::default);
    match context {
        Some(ctx) => ctx,
        None => {
            log::error!("use_navigator called without a NavigatorContext provider");
            NavigatorContext::new(detached)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(targets: &[PageId]) -> Rc<Navigation> {
        targets
            .iter()
            .fold(Rc::new(Navigation::default()), |state, target| state.reduce(*target))
    }

    #[test]
    fn starts_on_home() {
        assert_eq!(Navigation::default().current_page(), PageId::Home);
    }

    #[test]
    fn last_navigation_wins() {
        let state = run(&[PageId::Services, PageId::Order, PageId::Pricing]);
        assert_eq!(state.current_page(), PageId::Pricing);
    }

    #[test]
    fn navigating_to_the_same_page_is_allowed() {
        let state = run(&[PageId::Contact, PageId::Contact]);
        assert_eq!(state.current_page(), PageId::Contact);
    }

    #[test]
    fn every_navigation_is_a_new_visit() {
        let once = run(&[PageId::Pricing]);
        let twice = run(&[PageId::Pricing, PageId::Pricing]);
        assert_eq!(once.current_page(), twice.current_page());
        assert_ne!(once.visit(), twice.visit());
        assert_ne!(*once, *twice);
        assert_eq!(Navigation::default().visit(), 0);
        assert_eq!(twice.visit(), 2);
    }

    #[test]
    fn every_page_reaches_every_page() {
        for from in PageId::ALL {
            for to in PageId::ALL {
                assert_eq!(run(&[from, to]).current_page(), to);
            }
        }
    }

    #[test]
    fn ids_round_trip_through_strings() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_id(page.as_str()), page);
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_home() {
        assert_eq!(PageId::from_id("blog"), PageId::Home);
        assert_eq!(PageId::from_id(""), PageId::Home);
        assert_eq!(PageId::from_id("Services"), PageId::Home);

        let ids = ["portfolio", "nope"];
        let state = ids
            .iter()
            .fold(Rc::new(Navigation::default()), |s, id| s.reduce(PageId::from_id(id)));
        assert_eq!(state.current_page(), PageId::Home);
    }

    #[test]
    fn nav_links_leave_out_the_order_page() {
        assert!(!NAV_LINKS.contains(&PageId::Order));
        assert_eq!(NAV_LINKS[0], PageId::Home);
    }
}
