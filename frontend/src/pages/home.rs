use yew::prelude::*;

use crate::components::sections::CtaBanner;
use crate::config::asset_url;
use crate::router::{use_navigator, PageId};

struct ServiceHighlight {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

struct Stat {
    value: &'static str,
    label: &'static str,
}

struct PreviewProject {
    name: &'static str,
    category: &'static str,
    image: &'static str,
    tech: &'static [&'static str],
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    rating: usize,
    avatar: &'static str,
}

const SERVICES: [ServiceHighlight; 4] = [
    ServiceHighlight {
        icon: "</>",
        title: "Web Development",
        description: "Custom websites built with modern technologies",
        features: &["React/Next.js", "TypeScript", "Responsive Design"],
    },
    ServiceHighlight {
        icon: "📱",
        title: "Mobile Apps",
        description: "Cross-platform mobile applications",
        features: &["Flutter", "iOS & Android", "Native Performance"],
    },
    ServiceHighlight {
        icon: "✒",
        title: "Digital Design",
        description: "Beautiful branding and UI/UX design",
        features: &["Figma", "User Research", "Prototyping"],
    },
    ServiceHighlight {
        icon: "🛒",
        title: "E-commerce",
        description: "Complete online store solutions",
        features: &["Shopify", "Payment Integration", "Inventory Management"],
    },
];

const STATS: [Stat; 4] = [
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "30+", label: "Happy Clients" },
    Stat { value: "98%", label: "Success Rate" },
    Stat { value: "24/7", label: "Support" },
];

const REASONS: [&str; 6] = [
    "Fast delivery and reliable service",
    "Modern, responsive designs",
    "SEO optimized websites",
    "Ongoing support and maintenance",
    "Affordable pricing packages",
    "Professional quality guaranteed",
];

const PREVIEW: [PreviewProject; 3] = [
    PreviewProject {
        name: "E-commerce Platform",
        category: "Website",
        image: "https://images.pexels.com/photos/7648047/pexels-photo-7648047.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["React", "Node.js", "MongoDB"],
    },
    PreviewProject {
        name: "Mobile Banking App",
        category: "App",
        image: "https://images.pexels.com/photos/4968630/pexels-photo-4968630.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["React Native", "Firebase", "Stripe"],
    },
    PreviewProject {
        name: "Brand Identity",
        category: "Design",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["Figma", "Adobe Suite", "Prototyping"],
    },
];

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Business Owner",
        content: "Outstanding work! My website looks professional and has helped grow my business significantly.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=64&h=64&fit=crop&crop=face",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Startup Founder",
        content: "Fast, reliable, and high-quality. Exactly what I needed for my startup.",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=64&h=64&fit=crop&crop=face",
    },
    Testimonial {
        name: "Emily Davis",
        role: "Freelancer",
        content: "Great communication and beautiful design. Highly recommended!",
        rating: 5,
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=64&h=64&fit=crop&crop=face",
    },
];

/// Filled stars for a rating, capped at five.
fn star_row(rating: usize) -> String {
    "★".repeat(rating.min(5))
}

#[function_component(Home)]
pub fn home() -> Html {
    let nav = use_navigator();
    let visible = use_state(|| false);

    // Fade the hero in once mounted.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(true);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="home-hero">
                <div class={classes!("hero-content", (*visible).then_some("visible"))}>
                    <div class="hero-badge">{"Trusted by 30+ Companies"}</div>
                    <h1>
                        {"Transform Your "}
                        <span class="gradient-text">{"Digital Presence"}</span>
                    </h1>
                    <p>
                        {"Empowering brands through innovation, crafting digital experiences that inspire growth and connection."}
                    </p>
                    <div class="button-row">
                        <button class="button-secondary" onclick={nav.link(PageId::Order)}>
                            {"Order Your Project →"}
                        </button>
                        <button class="button-ghost" onclick={nav.link(PageId::Portfolio)}>
                            {"View Our Work"}
                        </button>
                    </div>
                    <div class="stats-bar">
                        {
                            STATS.iter().map(|stat| html! {
                                <div class="stat" key={stat.label}>
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Comprehensive "}<span class="gradient-text">{"Services"}</span></h2>
                        <p>{"End-to-end services to transform your ideas into powerful digital experiences"}</p>
                    </div>
                    <div class="card-grid four">
                        {
                            SERVICES.iter().map(|service| html! {
                                <div class="card" key={service.title}>
                                    <div class="card-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul class="tag-list">
                                        { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section muted">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Why Choose Us?"}</h2>
                    </div>
                    <div class="card-grid three">
                        {
                            REASONS.iter().map(|reason| html! {
                                <div class="reason" key={*reason}>
                                    <span class="check">{"✓"}</span>
                                    <h3>{*reason}</h3>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Featured "}<span class="gradient-text">{"Work"}</span></h2>
                    </div>
                    <div class="card-grid three">
                        {
                            PREVIEW.iter().map(|project| html! {
                                <div class="project-card" key={project.name} onclick={nav.link(PageId::Portfolio)}>
                                    <img src={asset_url(project.image)} alt={project.name} />
                                    <div class="project-overlay">
                                        <span class="badge">{project.category}</span>
                                        <h3>{project.name}</h3>
                                        <div class="tag-list">
                                            { for project.tech.iter().map(|t| html! { <span>{*t}</span> }) }
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="center">
                        <button class="button-primary" onclick={nav.link(PageId::Portfolio)}>
                            {"View Full Portfolio →"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="section dark">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"What Clients Say"}</h2>
                    </div>
                    <div class="card-grid three">
                        {
                            TESTIMONIALS.iter().map(|t| html! {
                                <div class="testimonial" key={t.name}>
                                    <div class="stars">{ star_row(t.rating) }</div>
                                    <p>{format!("\"{}\"", t.content)}</p>
                                    <div class="author">
                                        <img src={t.avatar} alt={t.name} />
                                        <div>
                                            <strong>{t.name}</strong>
                                            <span>{t.role}</span>
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Ready to Transform Your Digital Presence?"
                text="Let's create something amazing together. Start your project today."
                primary={(AttrValue::from("Start Your Project"), PageId::Order)}
                secondary={Some((AttrValue::from("Get in Touch"), PageId::Contact))}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_row_matches_the_rating() {
        assert_eq!(star_row(5), "★★★★★");
        assert_eq!(star_row(3).chars().count(), 3);
        assert_eq!(star_row(0), "");
        assert_eq!(star_row(9).chars().count(), 5);
    }

    #[test]
    fn testimonials_render_full_star_rows() {
        for t in TESTIMONIALS.iter() {
            assert_eq!(star_row(t.rating).chars().count(), t.rating);
        }
    }
}
