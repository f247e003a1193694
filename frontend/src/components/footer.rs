use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config::SiteConfig;

struct SocialLink {
    label: &'static str,
    href: &'static str,
    color: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/haftu.584",
        color: "#1877F2",
    },
    SocialLink {
        label: "YouTube",
        href: "https://www.youtube.com/@luxurydesigndevelop",
        color: "#FF0000",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Haftush",
        color: "#9ca3af",
    },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = SiteConfig::get();
    let year = Utc::now().year();

    let messaging = [
        ("WhatsApp", site.chat_url(), "#25D366"),
        ("Telegram", site.bot_url(), "#0088cc"),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h3>{site.brand}</h3>
                    <p>
                        {"Professional web design and development services to bring your digital vision to life. Let's create something amazing together."}
                    </p>
                    <div class="footer-contact">
                        <a href={site.mailto_url()}>{site.email_address}</a>
                        <a href={site.phone_href}>{site.phone_display}</a>
                        <a href={site.location_href} target="_blank" rel="noopener noreferrer">
                            {site.location}
                        </a>
                    </div>
                </div>
                <div class="footer-social">
                    <h4>{"Let's Connect"}</h4>
                    <p>{"Follow us on social media for updates and insights."}</p>
                    <div class="social-icons">
                        {
                            messaging.iter().map(|(label, href, color)| html! {
                                <a
                                    key={*label}
                                    href={href.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={*label}
                                    style={format!("--brand-color: {}", color)}
                                >
                                    {*label}
                                </a>
                            }).collect::<Html>()
                        }
                        {
                            SOCIAL_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.label}
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.label}
                                    style={format!("--brand-color: {}", link.color)}
                                >
                                    {link.label}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, site.brand)}</p>
            </div>
        </footer>
    }
}
