use yew::prelude::*;

use crate::components::sections::{CtaBanner, PageHero};
use crate::router::{use_navigator, PageId};

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    price: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "</>",
        title: "Personal Portfolio",
        description: "Showcase your work and skills with a stunning portfolio website that makes a lasting impression.",
        features: &["Responsive Design", "Custom Layout", "Contact Forms", "Social Integration"],
        price: "From $100",
    },
    Service {
        icon: "🏢",
        title: "Business Websites",
        description: "Professional business websites that establish credibility and drive growth for your company.",
        features: &["Multi-page Design", "SEO Optimization", "Analytics Setup", "Lead Generation"],
        price: "From $250",
    },
    Service {
        icon: "🛒",
        title: "E-commerce",
        description: "Complete online store solutions with payment integration and inventory management.",
        features: &["Product Catalog", "Payment Gateway", "Shopping Cart", "Order Management"],
        price: "From $500",
    },
    Service {
        icon: "✒",
        title: "Branding & Digital Design",
        description: "Create a unique visual identity with custom logos, graphics, and brand guidelines.",
        features: &["Logo Design", "Brand Guidelines", "Marketing Materials", "UI/UX Design"],
        price: "Custom Quote",
    },
    Service {
        icon: "📱",
        title: "Mobile Applications",
        description: "Cross-platform mobile apps built with Flutter for iOS and Android devices.",
        features: &["Cross-platform", "Native Performance", "Push Notifications", "API Integration"],
        price: "From $800",
    },
    Service {
        icon: "🔧",
        title: "Programming & Tech Solutions",
        description: "Custom software development, API integration, and technical consulting services.",
        features: &["API Development", "Database Design", "System Integration", "Technical Support"],
        price: "Custom Quote",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let nav = use_navigator();

    html! {
        <div class="services-page">
            <PageHero
                title="Professional Services"
                subtitle="Comprehensive digital solutions tailored to your unique business needs"
            />
            <section class="section">
                <div class="container">
                    <div class="card-grid three">
                        {
                            SERVICES.iter().map(|service| html! {
                                <div class="card service-card" key={service.title}>
                                    <div class="card-title-row">
                                        <span class="card-icon">{service.icon}</span>
                                        <h3>{service.title}</h3>
                                    </div>
                                    <p>{service.description}</p>
                                    <ul class="bullet-list">
                                        { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                                    </ul>
                                    <div class="price-tag">{service.price}</div>
                                    <button class="button-primary full" onclick={nav.link(PageId::Order)}>
                                        {"Order Service"}
                                    </button>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <CtaBanner
                title="Ready to Start Your Project?"
                text="Choose the service that fits your needs and let's create something amazing together."
                primary={(AttrValue::from("Order a Service"), PageId::Order)}
                secondary={Some((AttrValue::from("View Pricing"), PageId::Pricing))}
            />
        </div>
    }
}
