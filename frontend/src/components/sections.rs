use yew::prelude::*;

use crate::router::{use_navigator, PageId};

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Gradient banner at the top of every inner page.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <div class="container center">
                <h1>{props.title.clone()}</h1>
                <p>{props.subtitle.clone()}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub title: AttrValue,
    pub text: AttrValue,
    pub primary: (AttrValue, PageId),
    #[prop_or_default]
    pub secondary: Option<(AttrValue, PageId)>,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    let nav = use_navigator();
    let (primary_label, primary_page) = props.primary.clone();

    html! {
        <section class="cta-banner">
            <div class="container center narrow">
                <h2>{props.title.clone()}</h2>
                <p>{props.text.clone()}</p>
                <div class="button-row">
                    <button class="button-secondary" onclick={nav.link(primary_page)}>
                        {primary_label}{" →"}
                    </button>
                    {
                        match props.secondary.clone() {
                            Some((label, page)) => html! {
                                <button class="button-ghost" onclick={nav.link(page)}>{label}</button>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <section class="section muted">
            <div class="container narrow">
                <div class="section-heading">
                    <h2>{props.title.clone()}</h2>
                    if let Some(subtitle) = props.subtitle.clone() {
                        <p>{subtitle}</p>
                    }
                </div>
                <div class="faq-list">
                    {
                        props.entries.iter().map(|entry| html! {
                            <div class="faq-card" key={entry.question}>
                                <h3>{entry.question}</h3>
                                <p>{entry.answer}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
