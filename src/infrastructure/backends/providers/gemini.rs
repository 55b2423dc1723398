//! Gemini mock provider - deterministic placeholder backend

use async_trait::async_trait;

use crate::application::errors::ReplyError;
use crate::domain::entities::ReplyRequest;
use crate::infrastructure::backends::ReplyBackend;

/// Fixed marker prefixing every mock reply
pub const GEMINI_MARKER: &str = "**Gemini Mock Reply**";

/// Placeholder generative backend.
///
/// Returns a deterministic templated echo of the prompt. A production
/// deployment would replace `generate` with a real Generative Language
/// API call while keeping the same contract: the dispatcher still maps
/// any `Err` to the fixed apology string.
pub struct GeminiMockProvider;

impl GeminiMockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GeminiMockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReplyBackend for GeminiMockProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &ReplyRequest) -> Result<String, ReplyError> {
        Ok(format!("{}: analysis of [{}]", GEMINI_MARKER, request.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reply_starts_with_marker() {
        let provider = GeminiMockProvider::new();
        let reply = provider
            .generate(&ReplyRequest::new("tell me about gemini", "U1"))
            .await
            .unwrap();

        assert!(reply.starts_with(GEMINI_MARKER));
        assert!(reply.contains("tell me about gemini"));
    }

    #[tokio::test]
    async fn test_reply_is_deterministic() {
        let provider = GeminiMockProvider::new();
        let request = ReplyRequest::new("same prompt", "U1");

        let first = provider.generate(&request).await.unwrap();
        let second = provider.generate(&request).await.unwrap();
        assert_eq!(first, second);
    }
}
