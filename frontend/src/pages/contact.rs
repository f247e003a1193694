use yew::prelude::*;

use crate::components::sections::{FaqEntry, FaqList, PageHero};
use crate::config::SiteConfig;
use crate::router::{use_navigator, PageId};

const SOCIAL: [(&str, &str); 3] = [
    ("Facebook", "https://www.facebook.com/haftu.584"),
    ("YouTube", "https://www.youtube.com/@luxurydesigndevelop"),
    ("GitHub", "https://github.com/Haftush"),
];

static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "What's your typical response time?",
        answer: "I respond to all inquiries within 24 hours, usually much faster. For urgent projects, feel free to reach me directly on WhatsApp.",
    },
    FaqEntry {
        question: "Do you work with international clients?",
        answer: "Yes! I work with clients from all over the world. All communication can be done through WhatsApp, Telegram, or email.",
    },
    FaqEntry {
        question: "What information should I provide?",
        answer: "The more details, the better! Include your project goals, desired features, timeline, budget, and any design preferences. You can use the order form to provide all this information.",
    },
    FaqEntry {
        question: "Can we schedule a call?",
        answer: "Absolutely! After initial contact, we can schedule a WhatsApp or Telegram call to discuss your project in detail.",
    },
];

struct ContactMethod {
    title: &'static str,
    value: String,
    link: String,
    color: &'static str,
}

fn contact_methods(site: &SiteConfig) -> [ContactMethod; 3] {
    [
        ContactMethod {
            title: "WhatsApp",
            value: format!("+{}", site.chat_recipient),
            link: site.chat_url(),
            color: "whatsapp",
        },
        ContactMethod {
            title: "Telegram",
            value: format!("@{}", site.bot_handle),
            link: site.bot_url(),
            color: "telegram",
        },
        ContactMethod {
            title: "Email",
            value: site.email_address.to_string(),
            link: site.mailto_url(),
            color: "email",
        },
    ]
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let nav = use_navigator();
    let site = SiteConfig::get();

    html! {
        <div class="contact-page">
            <PageHero
                title="Get In Touch"
                subtitle="Let's discuss your project and how I can help bring your vision to life"
            />
            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Contact Methods"}</h2>
                        <p>{"Choose your preferred way to reach me"}</p>
                    </div>
                    <div class="card-grid three">
                        {
                            contact_methods(site).into_iter().map(|method| html! {
                                <a
                                    key={method.title}
                                    class="card center contact-card"
                                    href={method.link}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <div class={classes!("contact-icon", method.color)}>{&method.title[..1]}</div>
                                    <h3>{method.title}</h3>
                                    <p>{method.value}</p>
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="card-grid two narrow">
                        <div class="info-card">
                            <h4>{"Location"}</h4>
                            <p>{"Available Worldwide"}</p>
                        </div>
                        <div class="info-card">
                            <h4>{"Response Time"}</h4>
                            <p>{"Within 24 hours"}</p>
                        </div>
                    </div>
                </div>
            </section>
            <section class="section muted">
                <div class="container center">
                    <h2>{"Follow Me On Social Media"}</h2>
                    <p>{"Stay updated with my latest projects and tips"}</p>
                    <div class="social-icons">
                        {
                            SOCIAL.iter().map(|(name, link)| html! {
                                <a key={*name} href={*link} target="_blank" rel="noopener noreferrer" aria-label={*name}>
                                    {*name}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="section">
                <div class="container narrow">
                    <div class="cta-card">
                        <h2>{"Ready to Start Your Project?"}</h2>
                        <p>{"I'm available for freelance projects and consulting. Let's create something amazing together!"}</p>
                        <div class="button-row">
                            <button class="button-secondary" onclick={nav.link(PageId::Order)}>
                                {"Order Now"}
                            </button>
                            <a class="button-ghost" href={site.chat_url()} target="_blank" rel="noopener noreferrer">
                                {"Chat on WhatsApp"}
                            </a>
                        </div>
                    </div>
                </div>
            </section>
            <FaqList
                title="FAQs"
                subtitle={Some(AttrValue::from("Common questions about working with me"))}
                entries={FAQ.as_slice()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_cards_follow_site_config() {
        let methods = contact_methods(SiteConfig::get());
        assert_eq!(methods[0].value, "+251929501350");
        assert_eq!(methods[0].link, "https://wa.me/251929501350");
        assert_eq!(methods[1].value, "@haphi_luxury");
        assert_eq!(methods[2].link, "mailto:haftu.g.mu24@gmail.com");
    }
}
