use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::OutboundMessage;

/// MessageSender trait - abstraction for the platform send API
///
/// Implementations issue a single outbound call per message; retry and
/// dedup are out of scope. The dispatcher decides what to do with a
/// failed send (log and drop).
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver one message to the platform
    async fn send(&self, message: &OutboundMessage) -> Result<(), BotError>;
}
