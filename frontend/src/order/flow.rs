use std::rc::Rc;
use yew::prelude::*;

use super::channel::{choose_channel, DeliveryChannel, ExternalHandoff};
use super::error::ValidationError;
use super::message::SerializedMessage;
use super::request::{OrderField, OrderRequest};

/// Validates a request and serializes it for hand-off.
pub fn submit(request: &OrderRequest) -> Result<SerializedMessage, ValidationError> {
    request.validate()?;
    Ok(SerializedMessage::from_request(request))
}

#[derive(Clone, Debug, PartialEq)]
pub enum FlowStage {
    Collecting,
    ChoosingChannel(SerializedMessage),
    Submitted(DeliveryChannel),
}

#[derive(Clone, Debug)]
pub enum OrderAction {
    UpdateField(OrderField, String),
    Submit,
    Cancel,
    ChannelChosen(DeliveryChannel),
    ResetConfirmation,
}

/// State of the order page. Actions that don't apply to the current stage
/// leave it untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderFlow {
    request: OrderRequest,
    stage: FlowStage,
    last_error: Option<ValidationError>,
}

impl Default for OrderFlow {
    fn default() -> Self {
        Self {
            request: OrderRequest::default(),
            stage: FlowStage::Collecting,
            last_error: None,
        }
    }
}

impl OrderFlow {
    pub fn request(&self) -> &OrderRequest {
        &self.request
    }

    pub fn stage(&self) -> &FlowStage {
        &self.stage
    }

    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    pub fn is_choosing_channel(&self) -> bool {
        matches!(self.stage, FlowStage::ChoosingChannel(_))
    }

    /// The link to open for `channel`, if a message is waiting for one.
    pub fn handoff(&self, channel: DeliveryChannel) -> Option<ExternalHandoff> {
        match &self.stage {
            FlowStage::ChoosingChannel(message) => Some(choose_channel(channel, message)),
            _ => None,
        }
    }

    fn with_stage(&self, stage: FlowStage) -> Self {
        Self {
            stage,
            ..self.clone()
        }
    }
}

impl Reducible for OrderFlow {
    type Action = OrderAction;

    fn reduce(self: Rc<Self>, action: OrderAction) -> Rc<Self> {
        let collecting = matches!(self.stage, FlowStage::Collecting);
        let choosing = self.is_choosing_channel();
        let submitted = matches!(self.stage, FlowStage::Submitted(_));

        match action {
            OrderAction::UpdateField(field, value) if collecting => {
                let mut next = (*self).clone();
                next.request.set(field, value);
                next.last_error = None;
                Rc::new(next)
            }
            OrderAction::Submit if collecting => match submit(&self.request) {
                Ok(message) => {
                    log::info!("order request validated, waiting for a delivery channel");
                    Rc::new(Self {
                        last_error: None,
                        ..self.with_stage(FlowStage::ChoosingChannel(message))
                    })
                }
                Err(err) => {
                    log::warn!("order submit rejected: {}", err);
                    Rc::new(Self {
                        last_error: Some(err),
                        ..(*self).clone()
                    })
                }
            },
            OrderAction::Cancel if choosing => Rc::new(self.with_stage(FlowStage::Collecting)),
            OrderAction::ChannelChosen(channel) if choosing => {
                log::info!("order handed off via {}", channel);
                Rc::new(Self {
                    request: OrderRequest::default(),
                    stage: FlowStage::Submitted(channel),
                    last_error: None,
                })
            }
            OrderAction::ResetConfirmation if submitted => Rc::new(OrderFlow::default()),
            other => {
                log::debug!("ignoring {:?} while {}", other, stage_name(&self.stage));
                self
            }
        }
    }
}

fn stage_name(stage: &FlowStage) -> &'static str {
    match stage {
        FlowStage::Collecting => "collecting",
        FlowStage::ChoosingChannel(_) => "choosing-channel",
        FlowStage::Submitted(_) => "submitted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::request::sample_request;

    fn filled() -> Rc<OrderFlow> {
        let request = sample_request();
        OrderField::ALL
            .into_iter()
            .fold(Rc::new(OrderFlow::default()), |flow, field| {
                flow.reduce(OrderAction::UpdateField(field, request.get(field).to_string()))
            })
    }

    #[test]
    fn starts_collecting_with_an_empty_request() {
        let flow = OrderFlow::default();
        assert_eq!(flow.stage(), &FlowStage::Collecting);
        assert!(flow.request().is_empty());
    }

    #[test]
    fn field_updates_fill_the_request() {
        assert_eq!(filled().request(), &sample_request());
    }

    #[test]
    fn submit_with_a_missing_field_stays_collecting() {
        for field in OrderField::ALL {
            let flow = filled()
                .reduce(OrderAction::UpdateField(field, String::new()))
                .reduce(OrderAction::Submit);
            assert_eq!(flow.stage(), &FlowStage::Collecting);
            let err = flow.last_error().unwrap();
            assert!(err.concerns(field));
            assert_eq!(flow.request().get(field), "");
        }
    }

    #[test]
    fn editing_clears_the_previous_error() {
        let flow = Rc::new(OrderFlow::default()).reduce(OrderAction::Submit);
        assert!(flow.last_error().is_some());
        let flow = flow.reduce(OrderAction::UpdateField(OrderField::Name, "Sam".into()));
        assert!(flow.last_error().is_none());
    }

    #[test]
    fn valid_submit_moves_to_channel_choice() {
        let flow = filled().reduce(OrderAction::Submit);
        match flow.stage() {
            FlowStage::ChoosingChannel(message) => {
                assert_eq!(message, &SerializedMessage::from_request(&sample_request()));
            }
            other => panic!("unexpected stage {:?}", other),
        }
        assert!(flow.is_choosing_channel());
    }

    #[test]
    fn cancel_returns_to_the_form_with_data_intact() {
        let flow = filled()
            .reduce(OrderAction::Submit)
            .reduce(OrderAction::Cancel);
        assert_eq!(flow.stage(), &FlowStage::Collecting);
        assert_eq!(flow.request(), &sample_request());
    }

    #[test]
    fn handoff_is_only_available_while_choosing() {
        assert!(filled().handoff(DeliveryChannel::Chat).is_none());
        let flow = filled().reduce(OrderAction::Submit);
        let handoff = flow.handoff(DeliveryChannel::Chat).unwrap();
        assert!(handoff.url.starts_with("https://wa.me/251929501350?text="));
    }

    #[test]
    fn choosing_a_channel_resets_the_request() {
        for channel in DeliveryChannel::ALL {
            let flow = filled()
                .reduce(OrderAction::Submit)
                .reduce(OrderAction::ChannelChosen(channel));
            assert_eq!(flow.stage(), &FlowStage::Submitted(channel));
            assert!(flow.request().is_empty());

            let flow = flow.reduce(OrderAction::ResetConfirmation);
            assert_eq!(flow.stage(), &FlowStage::Collecting);
            assert!(flow.request().is_empty());
        }
    }

    #[test]
    fn out_of_stage_actions_are_ignored() {
        let collecting = filled();
        let same = collecting.clone().reduce(OrderAction::ChannelChosen(DeliveryChannel::Bot));
        assert!(Rc::ptr_eq(&collecting, &same));

        let choosing = filled().reduce(OrderAction::Submit);
        let same = choosing
            .clone()
            .reduce(OrderAction::UpdateField(OrderField::Name, "Other".into()));
        assert!(Rc::ptr_eq(&choosing, &same));

        let submitted = choosing.reduce(OrderAction::ChannelChosen(DeliveryChannel::Email));
        let same = submitted.clone().reduce(OrderAction::Submit);
        assert!(Rc::ptr_eq(&submitted, &same));
    }

    #[test]
    fn end_to_end_email_handoff() {
        let flow = filled().reduce(OrderAction::Submit);
        let handoff = flow.handoff(DeliveryChannel::Email).unwrap();
        assert!(handoff.url.starts_with("mailto:"));
        assert!(handoff.url.contains("?subject="));
        assert!(handoff.url.contains("&body="));
        assert!(handoff.url.contains("Name%3A%20Sam"));
        assert!(handoff.url.contains("Service%20Type%3A%20E-commerce"));

        let flow = flow.reduce(OrderAction::ChannelChosen(DeliveryChannel::Email));
        assert!(flow.request().is_empty());
    }

    #[test]
    fn pure_submit_matches_the_reducer() {
        assert!(submit(&OrderRequest::default()).is_err());
        assert_eq!(
            submit(&sample_request()).unwrap(),
            SerializedMessage::from_request(&sample_request())
        );
    }
}
