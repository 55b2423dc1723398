/// What kind of content a messaging event carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Message,
    Postback,
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Message => "message",
            EventKind::Postback => "postback",
            EventKind::Other => "other",
        }
    }
}

/// A single messaging event extracted from a webhook delivery.
///
/// Lives only for the duration of one dispatch; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Page-scoped sender identifier (PSID)
    pub sender_id: String,
    pub kind: EventKind,
    /// Message text, present only for text messages
    pub text: Option<String>,
}

impl InboundEvent {
    pub fn message(sender_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            kind: EventKind::Message,
            text: Some(text.into()),
        }
    }

    pub fn postback(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            kind: EventKind::Postback,
            text: None,
        }
    }

    pub fn other(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            kind: EventKind::Other,
            text: None,
        }
    }

    /// Text content, if this event is a text message
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Which reply backend produced (or should produce) a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Dialogflow,
    Gemini,
}

impl Backend {
    pub fn as_str(&self) -> &str {
        match self {
            Backend::Dialogflow => "dialogflow",
            Backend::Gemini => "gemini",
        }
    }
}

/// Input to a reply backend
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub text: String,
    /// Session key for the backend, derived from the sender id
    pub session_id: String,
}

impl ReplyRequest {
    pub fn new(text: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            session_id: session_id.into(),
        }
    }
}

/// Outcome of the reply pipeline for one event.
///
/// Invariant: `text` is never empty - backend failures and empty
/// fulfillments are substituted with fixed fallback strings before
/// a `ReplyResult` is built.
#[derive(Debug, Clone)]
pub struct ReplyResult {
    pub text: String,
    pub source: Backend,
    pub succeeded: bool,
}

/// A reply to deliver to the platform, sent exactly once per text event
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub recipient_id: String,
    pub text: String,
}

impl OutboundMessage {
    pub fn new(recipient_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            text: text.into(),
        }
    }
}
