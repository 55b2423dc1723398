//! Reply backend trait - unified interface over text-generation services

use async_trait::async_trait;

use crate::application::errors::ReplyError;
use crate::domain::entities::ReplyRequest;

/// A reply-generation backend.
///
/// Implementations return an explicit `Result`; they never substitute
/// fallback text themselves. The dispatcher owns the mapping from
/// failure to user-facing strings, so the policy lives in one place.
#[async_trait]
pub trait ReplyBackend: Send + Sync {
    /// Backend name, used for logging
    fn name(&self) -> &str;

    /// Produce reply text for a session-scoped request
    async fn generate(&self, request: &ReplyRequest) -> Result<String, ReplyError>;
}
