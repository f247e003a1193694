use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::sections::PageHero;
use crate::order::{
    DeliveryChannel, FlowStage, OrderAction, OrderField, OrderFlow, BUDGET_TIERS, SERVICE_TYPES,
};
use crate::utils::browser;

const STEPS: [(u8, &str, &str); 3] = [
    (1, "Submit Form", "Fill out the order form with your project details"),
    (2, "Review & Quote", "I'll review your requirements and send a detailed quote"),
    (3, "Start Building", "Once approved, I'll start working on your project"),
];

/// Reads the value out of whichever form widget fired the event.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[derive(Properties, PartialEq)]
struct ChannelPickerProps {
    preview: AttrValue,
    on_pick: Callback<DeliveryChannel>,
    on_cancel: Callback<MouseEvent>,
}

#[function_component(ChannelPicker)]
fn channel_picker(props: &ChannelPickerProps) -> Html {
    html! {
        <div class="modal-root">
            <div class="modal-backdrop"></div>
            <div class="modal-card">
                <button class="modal-close" onclick={props.on_cancel.clone()}>{"✕"}</button>
                <h2>{"Choose where to send your order"}</h2>
                <p class="muted-text">
                    {"Select WhatsApp, Telegram or Email to complete your order submission."}
                </p>
                <pre class="message-preview">{props.preview.clone()}</pre>
                <div class="button-row">
                    {
                        DeliveryChannel::ALL.iter().map(|channel| {
                            let channel = *channel;
                            let onclick = props.on_pick.reform(move |_: MouseEvent| channel);
                            html! {
                                <button
                                    key={channel.as_str()}
                                    class={classes!("channel-button", channel.as_str())}
                                    {onclick}
                                >
                                    {channel.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfirmationProps {
    channel: DeliveryChannel,
    on_reset: Callback<MouseEvent>,
}

#[function_component(Confirmation)]
fn confirmation(props: &ConfirmationProps) -> Html {
    html! {
        <div class="confirmation">
            <div class="confirmation-card">
                <div class="confirmation-icon">{"✓"}</div>
                <h2>{"Order Submitted!"}</h2>
                <p>
                    {format!(
                        "Thank you for your order request. I'll review your requirements and get back to you shortly via {}.",
                        props.channel.label()
                    )}
                </p>
                <button class="button-primary" onclick={props.on_reset.clone()}>
                    {"Submit Another Order"}
                </button>
            </div>
        </div>
    }
}

#[function_component(Order)]
pub fn order() -> Html {
    let flow = use_reducer(OrderFlow::default);

    let on_change = |field: OrderField| {
        let flow = flow.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                flow.dispatch(OrderAction::UpdateField(field, value));
            }
        })
    };
    // Keystrokes go through `input`, selects through `change`; both land in the same update.
    let on_input = |field: OrderField| {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                flow.dispatch(OrderAction::UpdateField(field, value));
            }
        })
    };

    let onsubmit = {
        let flow = flow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            flow.dispatch(OrderAction::Submit);
        })
    };

    let on_pick = {
        let flow = flow.clone();
        Callback::from(move |channel: DeliveryChannel| {
            let Some(handoff) = flow.handoff(channel) else {
                return;
            };
            if let Err(e) = browser::open_external(&handoff) {
                log::error!("order hand-off failed: {}", e);
            }
            flow.dispatch(OrderAction::ChannelChosen(channel));
        })
    };

    let on_cancel = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| flow.dispatch(OrderAction::Cancel))
    };

    if let FlowStage::Submitted(channel) = flow.stage() {
        let on_reset = {
            let flow = flow.clone();
            Callback::from(move |_: MouseEvent| flow.dispatch(OrderAction::ResetConfirmation))
        };
        return html! { <Confirmation channel={*channel} {on_reset} /> };
    }

    let request = flow.request();
    let error = flow.last_error();
    let field_class = |field: OrderField| {
        classes!(
            "form-input",
            error.map_or(false, |err| err.concerns(field)).then_some("invalid-input")
        )
    };

    html! {
        <div class="order-page">
            <PageHero
                title="Order Your Project"
                subtitle="Fill out the form below and I'll help bring your vision to life."
            />
            <section class="section">
                <div class="container narrow">
                    <form class="order-form" {onsubmit}>
                        <div class="form-grid">
                            <label>
                                {"Full Name *"}
                                <input
                                    type="text"
                                    name="name"
                                    required=true
                                    placeholder="Your Full Name"
                                    value={request.name.clone()}
                                    class={field_class(OrderField::Name)}
                                    oninput={on_input(OrderField::Name)}
                                />
                            </label>
                            <label>
                                {"Email Address *"}
                                <input
                                    type="email"
                                    name="email"
                                    required=true
                                    placeholder="your@example.com"
                                    value={request.email.clone()}
                                    class={field_class(OrderField::Email)}
                                    oninput={on_input(OrderField::Email)}
                                />
                            </label>
                        </div>
                        <label>
                            {"WhatsApp / Contact Number *"}
                            <input
                                type="tel"
                                name="contact_number"
                                required=true
                                placeholder="+2519..."
                                value={request.contact_number.clone()}
                                class={field_class(OrderField::ContactNumber)}
                                oninput={on_input(OrderField::ContactNumber)}
                            />
                        </label>
                        <div class="form-grid">
                            <label>
                                {"Service Type *"}
                                <select
                                    name="service_type"
                                    required=true
                                    class={field_class(OrderField::ServiceType)}
                                    onchange={on_change(OrderField::ServiceType)}
                                >
                                    <option value="" selected={request.service_type.is_empty()}>
                                        {"Select a service"}
                                    </option>
                                    {
                                        SERVICE_TYPES.iter().map(|s| html! {
                                            <option key={*s} value={*s} selected={request.service_type == *s}>{*s}</option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </label>
                            <label>
                                {"Budget Range *"}
                                <select
                                    name="budget_tier"
                                    required=true
                                    class={field_class(OrderField::BudgetTier)}
                                    onchange={on_change(OrderField::BudgetTier)}
                                >
                                    <option value="" selected={request.budget_tier.is_empty()}>
                                        {"Select budget"}
                                    </option>
                                    {
                                        BUDGET_TIERS.iter().map(|b| html! {
                                            <option key={*b} value={*b} selected={request.budget_tier == *b}>{*b}</option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </label>
                        </div>
                        <label>
                            {"Project Description *"}
                            <textarea
                                name="description"
                                required=true
                                rows="6"
                                placeholder="Describe your project requirements..."
                                value={request.description.clone()}
                                class={field_class(OrderField::Description)}
                                oninput={on_input(OrderField::Description)}
                            />
                        </label>
                        if let Some(err) = error {
                            <div class="form-error">{err.to_string()}</div>
                        }
                        <button type="submit" class="button-secondary full">
                            {"Send Order ➤"}
                        </button>
                    </form>
                </div>
            </section>
            <section class="section muted">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"What Happens Next?"}</h2>
                    </div>
                    <div class="card-grid three">
                        {
                            STEPS.iter().map(|(num, title, text)| html! {
                                <div class="step center" key={*title}>
                                    <div class="step-number">{num.to_string()}</div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>
            if let FlowStage::ChoosingChannel(message) = flow.stage() {
                <ChannelPicker preview={message.text().to_string()} {on_pick} {on_cancel} />
            }
        </div>
    }
}
