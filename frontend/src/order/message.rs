use super::request::{OrderField, OrderRequest};

const GREETING: &str = "Hello! I'd like to order a website.";

/// Human-readable order text plus its percent-encoded form for URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializedMessage {
    text: String,
    encoded: String,
}

impl SerializedMessage {
    pub fn from_request(request: &OrderRequest) -> Self {
        let text = compose(request);
        let encoded = urlencoding::encode(&text).into_owned();
        Self { text, encoded }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Safe to drop into a query string as is.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

fn compose(request: &OrderRequest) -> String {
    let line = |field: OrderField| format!("{}: {}", field.label(), request.get(field).trim());

    let mut text = String::from(GREETING);
    text.push_str("\n\n");
    for field in &OrderField::ALL[..5] {
        text.push_str(&line(*field));
        text.push('\n');
    }
    // The description goes on its own paragraph since it is usually long.
    text.push('\n');
    text.push_str(OrderField::Description.label());
    text.push_str(":\n");
    text.push_str(request.get(OrderField::Description).trim());
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::request::sample_request;

    #[test]
    fn text_lists_fields_in_fixed_order() {
        let message = SerializedMessage::from_request(&sample_request());
        assert_eq!(
            message.text(),
            "Hello! I'd like to order a website.\n\n\
             Name: Sam\n\
             Email: sam@x.com\n\
             Contact Number: +1555\n\
             Service Type: E-commerce\n\
             Budget: Premium - $500+\n\n\
             Description:\nNeed a store"
        );
    }

    #[test]
    fn encoded_form_is_url_safe_and_decodes_back() {
        let message = SerializedMessage::from_request(&sample_request());
        let encoded = message.encoded();
        assert!(encoded.contains("Name%3A%20Sam"));
        assert!(encoded.contains("Service%20Type%3A%20E-commerce"));
        assert!(encoded.contains("Premium%20-%20%24500%2B"));
        assert!(!encoded.contains(|c: char| c == ' ' || c == '&' || c == '\n' || c == '?'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), message.text());
    }

    #[test]
    fn values_appear_in_order() {
        let request = sample_request();
        let message = SerializedMessage::from_request(&request);
        let positions: Vec<usize> = OrderField::ALL
            .iter()
            .map(|field| message.text().find(request.get(*field)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn serialization_is_deterministic() {
        let request = sample_request();
        assert_eq!(
            SerializedMessage::from_request(&request),
            SerializedMessage::from_request(&request)
        );
    }

    #[test]
    fn ampersands_in_values_cannot_break_the_query() {
        let mut request = sample_request();
        request.set(OrderField::Description, "shop & blog?x=1".to_string());
        let message = SerializedMessage::from_request(&request);
        assert!(message.encoded().contains("shop%20%26%20blog%3Fx%3D1"));
    }
}
