//! Event dispatcher - runs the reply pipeline for one inbound event

use std::sync::Arc;

use crate::application::messaging::router::BackendRouter;
use crate::domain::entities::{
    Backend, InboundEvent, OutboundMessage, ReplyRequest, ReplyResult,
};
use crate::domain::traits::MessageSender;
use crate::infrastructure::backends::ReplyBackend;

/// Canned reply for postbacks and non-text messages
pub const NON_TEXT_REPLY: &str = "I can only handle text messages for now.";

/// Fallback when a backend call fails outright
pub const BACKEND_ERROR_REPLY: &str = "Sorry, there was an error on the AI side.";

/// Fallback when a backend succeeds but returns empty fulfillment text
pub const EMPTY_FULFILLMENT_REPLY: &str = "I'm not sure I understand.";

/// Dispatches inbound events through the router to a reply backend and
/// delivers the result.
///
/// Every failure mode degrades to a fixed, non-empty reply string - the
/// pipeline never propagates a backend error to the caller, and send
/// failures are logged and dropped (the webhook was already acknowledged
/// by the time delivery happens).
pub struct EventDispatcher {
    router: BackendRouter,
    dialogflow: Arc<dyn ReplyBackend>,
    gemini: Arc<dyn ReplyBackend>,
    sender: Arc<dyn MessageSender>,
}

impl EventDispatcher {
    pub fn new(
        router: BackendRouter,
        dialogflow: Arc<dyn ReplyBackend>,
        gemini: Arc<dyn ReplyBackend>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        Self {
            router,
            dialogflow,
            gemini,
            sender,
        }
    }

    /// Handle one event end to end: produce a reply and deliver it.
    ///
    /// Sends exactly one message per event. Events without text get the
    /// canned reply without consulting any backend.
    pub async fn dispatch(&self, event: InboundEvent) {
        tracing::debug!(
            sender_id = %event.sender_id,
            kind = event.kind.as_str(),
            "dispatching inbound event"
        );

        let reply_text = match event.text() {
            Some(text) => {
                tracing::info!(sender_id = %event.sender_id, "user said: {}", text);
                self.generate_reply(text, &event.sender_id).await.text
            }
            None => NON_TEXT_REPLY.to_string(),
        };

        let message = OutboundMessage::new(&event.sender_id, reply_text);
        if let Err(e) = self.sender.send(&message).await {
            // No retry; the user never learns the reply was lost.
            tracing::error!(recipient_id = %message.recipient_id, "unable to send message: {}", e);
        }
    }

    /// Route the text to a backend and map its outcome to reply text.
    ///
    /// The returned `ReplyResult.text` is always non-empty: backend errors
    /// become the apology string, empty fulfillments become the
    /// "not sure" string.
    pub async fn generate_reply(&self, text: &str, sender_id: &str) -> ReplyResult {
        let backend = self.router.select(text);
        let adapter = match backend {
            Backend::Dialogflow => &self.dialogflow,
            Backend::Gemini => &self.gemini,
        };

        let request = ReplyRequest::new(text, sender_id);
        match adapter.generate(&request).await {
            Ok(fulfillment) if fulfillment.trim().is_empty() => ReplyResult {
                text: EMPTY_FULFILLMENT_REPLY.to_string(),
                source: backend,
                succeeded: true,
            },
            Ok(fulfillment) => ReplyResult {
                text: fulfillment,
                source: backend,
                succeeded: true,
            },
            Err(e) => {
                tracing::error!(backend = adapter.name(), "backend error: {}", e);
                ReplyResult {
                    text: BACKEND_ERROR_REPLY.to_string(),
                    source: backend,
                    succeeded: false,
                }
            }
        }
    }
}
