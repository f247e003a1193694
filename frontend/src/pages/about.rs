use yew::prelude::*;

use crate::components::sections::{CtaBanner, PageHero};
use crate::config::asset_url;
use crate::router::{use_navigator, PageId};

const PORTRAIT: &str =
    "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=800";

// (name, level in percent)
const SKILLS: [(&str, u8); 8] = [
    ("React", 95),
    ("TypeScript", 90),
    ("Node.js", 85),
    ("Flutter", 88),
    ("Tailwind CSS", 95),
    ("UI/UX Design", 90),
    ("Adobe Photoshop", 92),
    ("Adobe Illustrator", 88),
];

// (role, period, description)
const EXPERIENCE: [(&str, &str, &str); 3] = [
    (
        "Freelance Web Developer",
        "2021 - Present",
        "Creating custom websites and applications for clients worldwide",
    ),
    (
        "UI/UX Designer",
        "2020 - Present",
        "Designing beautiful and functional digital experiences",
    ),
    (
        "Digital Solutions Consultant",
        "2022 - Present",
        "Helping businesses establish their online presence",
    ),
];

// (title, issuer, year)
const CERTIFICATIONS: [(&str, &str, &str); 4] = [
    ("Full Stack Web Development", "Professional Certification", "2023"),
    ("Mobile App Development", "Flutter Certified", "2023"),
    ("UI/UX Design Professional", "Adobe Certified", "2022"),
    ("Digital Marketing", "Google Certified", "2023"),
];

#[function_component(About)]
pub fn about() -> Html {
    let nav = use_navigator();

    html! {
        <div class="about-page">
            <PageHero
                title="About Me"
                subtitle="Passionate developer and designer dedicated to creating exceptional digital experiences"
            />
            <section class="section">
                <div class="container two-columns">
                    <img class="portrait" src={asset_url(PORTRAIT)} alt="Professional" />
                    <div class="bio">
                        <h2>{"Hello, I'm Your Web Developer"}</h2>
                        <p>{"With over 5 years of experience in web development and digital design, I specialize in creating beautiful, functional websites and applications that help businesses grow online."}</p>
                        <p>{"I'm passionate about clean code, modern design, and user experience. Every project I take on is an opportunity to create something unique and impactful."}</p>
                        <p>{"Whether you need a simple portfolio, a complex e-commerce platform, or a mobile app, I have the skills and experience to bring your vision to life."}</p>
                        <button class="button-secondary" onclick={nav.link(PageId::Order)}>
                            {"Hire Me →"}
                        </button>
                    </div>
                </div>
            </section>
            <section class="section muted">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Technical Skills"}</h2>
                        <p>{"Expertise across multiple technologies and platforms"}</p>
                    </div>
                    <div class="card-grid two">
                        {
                            SKILLS.iter().map(|(name, level)| html! {
                                <div class="skill" key={*name}>
                                    <div class="skill-label">
                                        <span>{*name}</span>
                                        <span>{format!("{}%", level)}</span>
                                    </div>
                                    <div class="skill-bar">
                                        <div class="skill-fill" style={format!("width: {}%", level)}></div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <section class="section">
                <div class="container narrow">
                    <div class="section-heading">
                        <h2>{"Experience"}</h2>
                        <p>{"Professional journey and expertise"}</p>
                    </div>
                    {
                        EXPERIENCE.iter().map(|(role, period, description)| html! {
                            <div class="experience" key={*role}>
                                <div class="experience-head">
                                    <h3>{*role}</h3>
                                    <span class="badge">{*period}</span>
                                </div>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <section class="section muted">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Certifications"}</h2>
                        <p>{"Professional credentials and achievements"}</p>
                    </div>
                    <div class="card-grid four">
                        {
                            CERTIFICATIONS.iter().map(|(title, issuer, year)| html! {
                                <div class="card center" key={*title}>
                                    <div class="card-icon">{"🏅"}</div>
                                    <h3>{*title}</h3>
                                    <p>{*issuer}</p>
                                    <span class="badge">{*year}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            <CtaBanner
                title="Let's Work Together"
                text="Ready to start your next project? Get in touch and let's create something amazing."
                primary={(AttrValue::from("Hire Me Now"), PageId::Order)}
                secondary={Some((AttrValue::from("Contact Me"), PageId::Contact))}
            />
        </div>
    }
}
