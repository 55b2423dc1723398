//! Webhook payload parser - turns raw deliveries into typed events
//!
//! Payload validation happens here, decoupled from the dispatch logic:
//! the server hands the deserialized body over and gets back either a
//! list of typed [`InboundEvent`]s or a rejection (non-page envelope).

use serde::Deserialize;

use crate::domain::entities::InboundEvent;

/// Raw webhook delivery body.
///
/// Shape: `{ "object": "page", "entry": [ { "messaging": [ ... ] } ] }`.
/// Everything beyond `object` is permissive so that envelope recognition
/// is governed by the page check alone.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// One page entry in a delivery; may batch several messaging events
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

/// A single raw messaging event
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingEvent {
    pub sender: Sender,
    #[serde(default)]
    pub message: Option<MessagePayload>,
    #[serde(default)]
    pub postback: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub text: Option<String>,
}

impl WebhookPayload {
    /// Whether this delivery is a page-scoped event envelope.
    ///
    /// Anything else is unrecognized and maps to 404 at the boundary.
    pub fn is_page_scoped(&self) -> bool {
        self.object == "page"
    }

    /// Extract every messaging event from every entry as typed events.
    ///
    /// The platform batches deliveries; all events are surfaced so each
    /// can be dispatched independently.
    pub fn events(&self) -> Vec<InboundEvent> {
        self.entry
            .iter()
            .flat_map(|entry| entry.messaging.iter())
            .map(MessagingEvent::to_inbound)
            .collect()
    }
}

impl MessagingEvent {
    fn to_inbound(&self) -> InboundEvent {
        if let Some(message) = &self.message {
            match &message.text {
                Some(text) => InboundEvent::message(&self.sender.id, text),
                // Attachment-only message (photo, file, ...)
                None => InboundEvent::other(&self.sender.id),
            }
        } else if self.postback.is_some() {
            InboundEvent::postback(&self.sender.id)
        } else {
            InboundEvent::other(&self.sender.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EventKind;

    fn parse(body: &str) -> WebhookPayload {
        serde_json::from_str(body).expect("valid JSON")
    }

    #[test]
    fn test_non_page_envelope_rejected() {
        let payload = parse(r#"{"object":"instagram","entry":[]}"#);
        assert!(!payload.is_page_scoped());
    }

    #[test]
    fn test_missing_object_rejected() {
        let payload = parse(r#"{"entry":[]}"#);
        assert!(!payload.is_page_scoped());
    }

    #[test]
    fn test_text_message_event() {
        let payload = parse(
            r#"{"object":"page","entry":[{"messaging":[
                {"sender":{"id":"U1"},"message":{"text":"hello"}}
            ]}]}"#,
        );
        assert!(payload.is_page_scoped());

        let events = payload.events();
        assert_eq!(events, vec![InboundEvent::message("U1", "hello")]);
    }

    #[test]
    fn test_attachment_message_has_no_text() {
        let payload = parse(
            r#"{"object":"page","entry":[{"messaging":[
                {"sender":{"id":"U1"},"message":{"attachments":[{"type":"image"}]}}
            ]}]}"#,
        );

        let events = payload.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Other);
        assert!(events[0].text().is_none());
    }

    #[test]
    fn test_postback_event() {
        let payload = parse(
            r#"{"object":"page","entry":[{"messaging":[
                {"sender":{"id":"U2"},"postback":{"payload":"GET_STARTED"}}
            ]}]}"#,
        );

        let events = payload.events();
        assert_eq!(events, vec![InboundEvent::postback("U2")]);
    }

    #[test]
    fn test_batched_delivery_yields_all_events() {
        let payload = parse(
            r#"{"object":"page","entry":[
                {"messaging":[
                    {"sender":{"id":"U1"},"message":{"text":"first"}},
                    {"sender":{"id":"U2"},"message":{"text":"second"}}
                ]},
                {"messaging":[
                    {"sender":{"id":"U3"},"message":{"text":"third"}}
                ]}
            ]}"#,
        );

        let events = payload.events();
        assert_eq!(
            events,
            vec![
                InboundEvent::message("U1", "first"),
                InboundEvent::message("U2", "second"),
                InboundEvent::message("U3", "third"),
            ]
        );
    }

    #[test]
    fn test_empty_entry_list() {
        let payload = parse(r#"{"object":"page","entry":[]}"#);
        assert!(payload.is_page_scoped());
        assert!(payload.events().is_empty());
    }
}
