//! Backend router - selects which reply backend handles a text

use crate::domain::entities::Backend;

/// Routes user text to a reply backend.
///
/// Pure function of the input text: a case-insensitive substring test on
/// the trigger keyword. Keyword present selects the generative backend,
/// absent selects the Dialogflow backend. No session memory, no sticky
/// routing across turns.
pub struct BackendRouter {
    trigger_keyword: String,
}

impl BackendRouter {
    pub fn new(trigger_keyword: impl Into<String>) -> Self {
        Self {
            trigger_keyword: trigger_keyword.into().to_lowercase(),
        }
    }

    /// Select the backend for a piece of user text
    pub fn select(&self, text: &str) -> Backend {
        if text.to_lowercase().contains(&self.trigger_keyword) {
            Backend::Gemini
        } else {
            Backend::Dialogflow
        }
    }
}
