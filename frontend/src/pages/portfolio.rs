use std::rc::Rc;
use yew::prelude::*;

use crate::components::sections::PageHero;
use crate::config::asset_url;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Websites,
    Apps,
    Branding,
}

impl Category {
    pub const FILTERS: [Category; 4] = [
        Category::All,
        Category::Websites,
        Category::Apps,
        Category::Branding,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Websites => "Websites",
            Category::Apps => "Apps",
            Category::Branding => "Branding",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    /// `"#"` means there is nothing to link to.
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub technologies: &'static [&'static str],
    pub featured: bool,
}

fn has_link(url: &str) -> bool {
    !url.is_empty() && url != "#"
}

pub static PROJECTS: [Project; 12] = [
    Project {
        title: "E-commerce Platform",
        category: Category::Websites,
        image: "https://images.pexels.com/photos/7648047/pexels-photo-7648047.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Full-featured online store with payment integration",
        full_description: "A comprehensive e-commerce solution built with modern web technologies. Features include user authentication, product catalog, shopping cart, payment processing, and admin dashboard. The platform supports multiple payment gateways and provides a seamless shopping experience across all devices.",
        live_url: "https://demo-ecommerce.com",
        github_url: "https://github.com/username/ecommerce-platform",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Tailwind CSS"],
        featured: true,
    },
    Project {
        title: "Corporate Website",
        category: Category::Websites,
        image: "https://images.pexels.com/photos/326503/pexels-photo-326503.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Professional business website with CMS",
        full_description: "A modern corporate website with custom content management system. Built for optimal performance and SEO. Features include blog management, team profiles, service pages, and contact forms with lead capture.",
        live_url: "https://corporate-demo.com",
        github_url: "https://github.com/username/corporate-website",
        technologies: &["Next.js", "TypeScript", "Sanity CMS", "Vercel"],
        featured: false,
    },
    Project {
        title: "Restaurant Website",
        category: Category::Websites,
        image: "https://images.pexels.com/photos/1579253/pexels-photo-1579253.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Modern restaurant site with online ordering",
        full_description: "A beautiful restaurant website with online ordering system. Customers can browse the menu, place orders for delivery or pickup, and make reservations. Integrated with payment processing and order management.",
        live_url: "https://restaurant-demo.com",
        github_url: "https://github.com/username/restaurant-website",
        technologies: &["Vue.js", "Firebase", "Stripe", "CSS3"],
        featured: false,
    },
    Project {
        title: "Mobile Banking App",
        category: Category::Apps,
        image: "https://images.pexels.com/photos/4968630/pexels-photo-4968630.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Secure banking application for iOS and Android",
        full_description: "A secure mobile banking application with biometric authentication, transaction history, bill payments, and fund transfers. Built with security as the top priority using industry-standard encryption.",
        live_url: "https://apps.apple.com/banking-app",
        github_url: "https://github.com/username/banking-app",
        technologies: &["React Native", "Node.js", "PostgreSQL", "JWT"],
        featured: true,
    },
    Project {
        title: "Fitness Tracker",
        category: Category::Apps,
        image: "https://images.pexels.com/photos/4162485/pexels-photo-4162485.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Health and fitness tracking mobile app",
        full_description: "Comprehensive fitness tracking application that monitors workouts, nutrition, and progress. Includes social features, workout plans, and integration with wearable devices.",
        live_url: "https://play.google.com/fitness-tracker",
        github_url: "https://github.com/username/fitness-tracker",
        technologies: &["Flutter", "Dart", "Firebase", "REST API"],
        featured: false,
    },
    Project {
        title: "Social Media App",
        category: Category::Apps,
        image: "https://images.pexels.com/photos/267350/pexels-photo-267350.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Community-focused social networking platform",
        full_description: "A social media platform focusing on community engagement. Features include real-time messaging, content sharing, groups, events, and advanced privacy controls.",
        live_url: "https://social-app-demo.com",
        github_url: "https://github.com/username/social-app",
        technologies: &["React Native", "GraphQL", "MongoDB", "WebSocket"],
        featured: false,
    },
    Project {
        title: "Brand Identity Design",
        category: Category::Branding,
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Complete brand package with logo and guidelines",
        full_description: "Comprehensive brand identity package including logo design, color palette, typography system, and brand guidelines. Created to establish a strong visual identity across all marketing materials.",
        live_url: "#",
        github_url: "#",
        technologies: &["Adobe Illustrator", "Photoshop", "Figma", "Brand Guidelines"],
        featured: false,
    },
    Project {
        title: "Marketing Materials",
        category: Category::Branding,
        image: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Print and digital marketing collateral",
        full_description: "A complete suite of marketing materials including brochures, business cards, social media graphics, and email templates. Designed to maintain brand consistency across all touchpoints.",
        live_url: "#",
        github_url: "#",
        technologies: &["Adobe Creative Suite", "Figma", "Canva", "Print Design"],
        featured: false,
    },
    Project {
        title: "UI/UX Design System",
        category: Category::Branding,
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Comprehensive design system for web application",
        full_description: "A complete design system with reusable components, design tokens, and documentation. Ensures consistency and accelerates development across multiple products.",
        live_url: "#",
        github_url: "#",
        technologies: &["Figma", "Storybook", "Design Tokens", "Component Library"],
        featured: true,
    },
    Project {
        title: "Portfolio Website",
        category: Category::Websites,
        image: "https://images.pexels.com/photos/1779487/pexels-photo-1779487.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Personal portfolio for creative professional",
        full_description: "A custom-built portfolio website showcasing creative work and professional achievements. Features smooth animations, responsive design, and optimized performance.",
        live_url: "https://portfolio-demo.com",
        github_url: "https://github.com/username/portfolio",
        technologies: &["React", "Framer Motion", "Tailwind CSS", "Vercel"],
        featured: false,
    },
    Project {
        title: "Real Estate Platform",
        category: Category::Websites,
        image: "https://images.pexels.com/photos/1546168/pexels-photo-1546168.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Property listing and management system",
        full_description: "A comprehensive real estate platform with property listings, advanced search filters, virtual tours, and agent management system. Integrated with MLS and mapping services.",
        live_url: "https://realestate-demo.com",
        github_url: "https://github.com/username/real-estate-platform",
        technologies: &["Next.js", "PostgreSQL", "Mapbox", "Cloudinary"],
        featured: false,
    },
    Project {
        title: "Delivery App",
        category: Category::Apps,
        image: "https://images.pexels.com/photos/4393021/pexels-photo-4393021.jpeg?auto=compress&cs=tinysrgb&w=800",
        description: "Food delivery mobile application",
        full_description: "A food delivery application with real-time order tracking, multiple restaurant options, and secure payment processing. Features include order history, favorites, and push notifications.",
        live_url: "https://play.google.com/delivery-app",
        github_url: "https://github.com/username/delivery-app",
        technologies: &["React Native", "Firebase", "Stripe", "Google Maps API"],
        featured: false,
    },
];

/// Indices into `projects` matching `filter`, in listing order.
pub fn filter_projects(projects: &[Project], filter: Category) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| filter == Category::All || p.category == filter)
        .map(|(i, _)| i)
        .collect()
}

#[derive(Clone, Debug)]
pub enum PortfolioAction {
    SetFilter(Category),
    Open(usize),
    Close,
}

/// Active filter and the project shown in the detail modal, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioState {
    pub filter: Category,
    pub selected: Option<usize>,
}

impl Reducible for PortfolioState {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: PortfolioAction) -> Rc<Self> {
        match action {
            PortfolioAction::SetFilter(filter) => Rc::new(Self {
                filter,
                selected: self.selected,
            }),
            PortfolioAction::Open(index) if index < PROJECTS.len() => Rc::new(Self {
                filter: self.filter,
                selected: Some(index),
            }),
            PortfolioAction::Open(index) => {
                log::warn!("no portfolio project at index {}", index);
                self
            }
            PortfolioAction::Close => Rc::new(Self {
                filter: self.filter,
                selected: None,
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: &'static Project,
    on_close: Callback<MouseEvent>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;
    html! {
        <div class="modal-root">
            <div class="modal-backdrop" onclick={props.on_close.clone()}></div>
            <div class="modal-card wide">
                <div class="modal-header">
                    <h2 class="gradient-text">{project.title}</h2>
                    <button class="modal-close" onclick={props.on_close.clone()}>{"✕"}</button>
                </div>
                <div class="modal-body two-columns">
                    <div>
                        <img class="modal-image" src={asset_url(project.image)} alt={project.title} />
                        <div class="button-row">
                            if has_link(project.live_url) {
                                <a class="button-primary" href={project.live_url} target="_blank" rel="noopener noreferrer">
                                    {"▶ View Demo ↗"}
                                </a>
                            }
                            if has_link(project.github_url) {
                                <a class="button-outline" href={project.github_url} target="_blank" rel="noopener noreferrer">
                                    {"Source Code"}
                                </a>
                            }
                        </div>
                    </div>
                    <div>
                        <h4>{"Project Overview"}</h4>
                        <p>{project.full_description}</p>
                        <h4>{"Technologies & Tools"}</h4>
                        <div class="tag-list">
                            { for project.technologies.iter().map(|t| html! { <span class="badge" key={*t}>{*t}</span> }) }
                        </div>
                        if project.featured {
                            <div class="featured-note">{"✨ Featured Project"}</div>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let state = use_reducer(PortfolioState::default);
    let visible = filter_projects(&PROJECTS, state.filter);

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PortfolioAction::Close))
    };

    html! {
        <div class="portfolio-page">
            <PageHero
                title="Portfolio"
                subtitle="Explore my recent work and see how I've helped clients achieve their digital goals"
            />
            <section class="section">
                <div class="container">
                    <div class="filter-row">
                        {
                            Category::FILTERS.iter().map(|category| {
                                let onclick = {
                                    let state = state.clone();
                                    let category = *category;
                                    Callback::from(move |_: MouseEvent| {
                                        state.dispatch(PortfolioAction::SetFilter(category))
                                    })
                                };
                                html! {
                                    <button
                                        key={category.label()}
                                        class={classes!("filter-button", (state.filter == *category).then_some("active"))}
                                        {onclick}
                                    >
                                        {category.label()}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="card-grid three">
                        {
                            visible.iter().map(|&index| {
                                let project = &PROJECTS[index];
                                let onclick = {
                                    let state = state.clone();
                                    Callback::from(move |_: MouseEvent| state.dispatch(PortfolioAction::Open(index)))
                                };
                                html! {
                                    <div class="project-card" key={project.title} {onclick}>
                                        <div class="project-image">
                                            <img src={asset_url(project.image)} alt={project.title} />
                                            <div class="project-hover">{"View Details ↗"}</div>
                                        </div>
                                        <div class="project-text">
                                            <h3>{project.title}</h3>
                                            <p>{project.description}</p>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    if visible.is_empty() {
                        <div class="empty-state">
                            <p>{"No projects found in this category."}</p>
                        </div>
                    }
                </div>
            </section>
            if let Some(index) = state.selected {
                <ProjectModal project={&PROJECTS[index]} on_close={close} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_project() {
        assert_eq!(filter_projects(&PROJECTS, Category::All).len(), PROJECTS.len());
    }

    #[test]
    fn category_filter_keeps_only_matching_projects() {
        let apps = filter_projects(&PROJECTS, Category::Apps);
        assert_eq!(apps.len(), 4);
        assert!(apps.iter().all(|&i| PROJECTS[i].category == Category::Apps));
        assert!(apps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn websites_filter_lists_all_five_sites() {
        let titles: Vec<_> = filter_projects(&PROJECTS, Category::Websites)
            .into_iter()
            .map(|i| PROJECTS[i].title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "E-commerce Platform",
                "Corporate Website",
                "Restaurant Website",
                "Portfolio Website",
                "Real Estate Platform",
            ]
        );
        assert_eq!(PROJECTS.len(), 12);
    }

    #[test]
    fn empty_listing_filters_to_nothing() {
        assert!(filter_projects(&[], Category::Branding).is_empty());
    }

    #[test]
    fn modal_opens_and_closes_without_touching_the_filter() {
        let state = Rc::new(PortfolioState::default())
            .reduce(PortfolioAction::SetFilter(Category::Branding))
            .reduce(PortfolioAction::Open(6));
        assert_eq!(state.selected, Some(6));
        assert_eq!(state.filter, Category::Branding);

        let state = state.reduce(PortfolioAction::Close);
        assert_eq!(state.selected, None);
        assert_eq!(state.filter, Category::Branding);
    }

    #[test]
    fn out_of_range_project_is_ignored() {
        let state = Rc::new(PortfolioState::default()).reduce(PortfolioAction::Open(99));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn placeholder_links_are_hidden() {
        assert!(!has_link("#"));
        assert!(!has_link(""));
        assert!(has_link("https://portfolio-demo.com"));
    }
}
