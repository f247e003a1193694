use std::fmt;

use crate::config::SiteConfig;

use super::message::SerializedMessage;

/// Where a submitted order is handed off to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeliveryChannel {
    /// Chat-app deep link (WhatsApp).
    Chat,
    /// Messaging-bot deep link (Telegram).
    Bot,
    /// Mail-compose link.
    Email,
}

impl DeliveryChannel {
    pub const ALL: [DeliveryChannel; 3] =
        [DeliveryChannel::Chat, DeliveryChannel::Bot, DeliveryChannel::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::Chat => "chat",
            DeliveryChannel::Bot => "bot",
            DeliveryChannel::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryChannel::Chat => "WhatsApp",
            DeliveryChannel::Bot => "Telegram",
            DeliveryChannel::Email => "Email",
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link the host environment should open to deliver the message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalHandoff {
    pub channel: DeliveryChannel,
    pub url: String,
}

/// Builds the channel-specific link carrying `message`.
pub fn choose_channel(channel: DeliveryChannel, message: &SerializedMessage) -> ExternalHandoff {
    build_handoff(SiteConfig::get(), channel, message)
}

pub fn build_handoff(
    site: &SiteConfig,
    channel: DeliveryChannel,
    message: &SerializedMessage,
) -> ExternalHandoff {
    let url = match channel {
        DeliveryChannel::Chat => format!(
            "https://{}/{}?text={}",
            site.chat_domain,
            site.chat_recipient,
            message.encoded()
        ),
        DeliveryChannel::Bot => format!(
            "https://{}/{}?text={}",
            site.bot_domain,
            site.bot_handle,
            message.encoded()
        ),
        DeliveryChannel::Email => format!(
            "mailto:{}?subject={}&body={}",
            site.email_address,
            urlencoding::encode(site.email_subject),
            message.encoded()
        ),
    };
    ExternalHandoff { channel, url }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::request::sample_request;

    fn message() -> SerializedMessage {
        SerializedMessage::from_request(&sample_request())
    }

    #[test]
    fn chat_link() {
        let msg = message();
        let handoff = choose_channel(DeliveryChannel::Chat, &msg);
        assert_eq!(
            handoff.url,
            format!("https://wa.me/251929501350?text={}", msg.encoded())
        );
        assert_eq!(handoff.channel, DeliveryChannel::Chat);
    }

    #[test]
    fn bot_link() {
        let msg = message();
        let handoff = choose_channel(DeliveryChannel::Bot, &msg);
        assert_eq!(
            handoff.url,
            format!("https://t.me/haphi_luxury?text={}", msg.encoded())
        );
    }

    #[test]
    fn email_link() {
        let handoff = choose_channel(DeliveryChannel::Email, &message());
        assert!(handoff
            .url
            .starts_with("mailto:haftu.g.mu24@gmail.com?subject=New%20Website%20Order&body="));
        assert!(handoff.url.contains("Name%3A%20Sam"));
        assert!(handoff.url.contains("Service%20Type%3A%20E-commerce"));
    }

    #[test]
    fn custom_site_settings_are_used() {
        let site = SiteConfig {
            chat_domain: "chat.example",
            chat_recipient: "42",
            ..SiteConfig::get().clone()
        };
        let handoff = build_handoff(&site, DeliveryChannel::Chat, &message());
        assert!(handoff.url.starts_with("https://chat.example/42?text=Hello"));
    }
}
