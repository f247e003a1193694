use yew::prelude::*;

use crate::components::sections::{CtaBanner, FaqEntry, FaqList, PageHero};
use crate::router::{use_navigator, PageId};

#[derive(Clone, PartialEq)]
pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

const PACKAGES: [Package; 3] = [
    Package {
        name: "Basic",
        price: "$100",
        description: "Perfect for personal portfolios and landing pages",
        features: &[
            "Single-page website",
            "Responsive design",
            "Contact form",
            "Basic SEO setup",
            "Mobile optimized",
            "1 week delivery",
            "1 revision round",
        ],
        popular: false,
    },
    Package {
        name: "Professional",
        price: "$250",
        description: "Ideal for small businesses and startups",
        features: &[
            "Multi-page website (up to 5 pages)",
            "Advanced responsive design",
            "Contact & custom forms",
            "SEO optimization",
            "Analytics integration",
            "Social media integration",
            "2 weeks delivery",
            "3 revision rounds",
            "30 days support",
        ],
        popular: true,
    },
    Package {
        name: "Premium",
        price: "$500+",
        description: "Complete solution for established businesses",
        features: &[
            "Unlimited pages",
            "Custom functionality",
            "E-commerce integration",
            "Advanced SEO & marketing",
            "Database integration",
            "API development",
            "Hosting setup",
            "Content management system",
            "Unlimited revisions",
            "90 days support",
            "Training included",
        ],
        popular: false,
    },
];

const ADD_ONS: [(&str, &str); 6] = [
    ("Additional page", "$50"),
    ("Logo design", "$100"),
    ("Content writing", "$75/page"),
    ("Extra revision round", "$50"),
    ("Extended support (30 days)", "$100"),
    ("E-commerce setup", "$200+"),
];

static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "What's included in the price?",
        answer: "Each package includes everything listed in the features. You'll get a fully functional, responsive website optimized for all devices with the specified number of revisions.",
    },
    FaqEntry {
        question: "How long does it take?",
        answer: "Delivery times vary by package: Basic (1 week), Professional (2 weeks), Premium (3-4 weeks). Rush delivery is available for an additional fee.",
    },
    FaqEntry {
        question: "Do you offer payment plans?",
        answer: "Yes! For Professional and Premium packages, I offer flexible payment plans. 50% upfront, 50% upon completion. Custom arrangements available for larger projects.",
    },
    FaqEntry {
        question: "What if I need something custom?",
        answer: "I'm happy to create custom packages! Contact me with your requirements, and I'll provide a tailored quote that fits your specific needs and budget.",
    },
];

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub package: Package,
    pub on_select: Callback<MouseEvent>,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let package = &props.package;
    html! {
        <div class={classes!("pricing-card", package.popular.then_some("popular"))}>
            if package.popular {
                <div class="popular-tag">{"MOST POPULAR"}</div>
            }
            <div class="pricing-body">
                <h3>{package.name}</h3>
                <div class="price">{package.price}</div>
                <p>{package.description}</p>
                <ul class="check-list">
                    { for package.features.iter().map(|f| html! { <li>{*f}</li> }) }
                </ul>
                <button
                    class={if package.popular { "button-secondary full" } else { "button-primary full" }}
                    onclick={props.on_select.clone()}
                >
                    {"Get Started"}
                </button>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let nav = use_navigator();

    html! {
        <div class="pricing-page">
            <PageHero
                title="Pricing Plans"
                subtitle="Transparent pricing with no hidden fees. Choose the package that fits your needs."
            />
            <section class="section">
                <div class="container">
                    <div class="card-grid three">
                        {
                            PACKAGES.iter().map(|package| html! {
                                <PricingCard
                                    key={package.name}
                                    package={package.clone()}
                                    on_select={nav.link(PageId::Order)}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="section muted">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Add-On Services"}</h2>
                        <p>{"Enhance your package with additional features"}</p>
                    </div>
                    <div class="card-grid three addons">
                        {
                            ADD_ONS.iter().map(|(name, price)| html! {
                                <div class="addon" key={*name}>
                                    <span>{*name}</span>
                                    <span class="addon-price">{*price}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <FaqList title="Frequently Asked Questions" entries={FAQ.as_slice()} />
            <CtaBanner
                title="Ready to Get Started?"
                text="Choose your package and let's bring your vision to life. Custom quotes available for unique projects."
                primary={(AttrValue::from("Place Your Order"), PageId::Order)}
                secondary={Some((AttrValue::from("Contact Me"), PageId::Contact))}
            />
        </div>
    }
}
