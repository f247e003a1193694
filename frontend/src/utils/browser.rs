use crate::order::{DeliveryChannel, ExternalHandoff, HandoffError};

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Asks the browser to open the hand-off link. Delivery itself is never
/// observed.
pub fn open_external(handoff: &ExternalHandoff) -> Result<(), HandoffError> {
    let window = web_sys::window().ok_or(HandoffError::NoWindow)?;
    match handoff.channel {
        // mailto: goes to the OS mail handler and leaves the page in place.
        DeliveryChannel::Email => window
            .location()
            .set_href(&handoff.url)
            .map_err(|_| HandoffError::Refused(handoff.channel)),
        DeliveryChannel::Chat | DeliveryChannel::Bot => {
            match window.open_with_url_and_target(&handoff.url, "_blank") {
                Ok(Some(_)) => Ok(()),
                // A null window means a popup blocker stepped in.
                Ok(None) | Err(_) => Err(HandoffError::Refused(handoff.channel)),
            }
        }
    }
}
