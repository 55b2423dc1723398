//! Messenger adapter - Facebook Graph Send API

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::errors::BotError;
use crate::domain::entities::OutboundMessage;
use crate::domain::traits::MessageSender;

/// Graph API base URL
const API_BASE: &str = "https://graph.facebook.com/v14.0";

/// Sends replies through the Messenger Send API.
///
/// One attempt per message, authenticated with the page access token as
/// a query-string credential. Retry policy belongs to the caller (there
/// is none).
pub struct MessengerAdapter {
    page_access_token: String,
    client: Client,
}

impl MessengerAdapter {
    pub fn new(page_access_token: impl Into<String>) -> Self {
        Self {
            page_access_token: page_access_token.into(),
            client: Client::new(),
        }
    }

    /// Send API URL with the access-token credential
    fn api_url(&self) -> String {
        format!(
            "{}/me/messages?access_token={}",
            API_BASE, self.page_access_token
        )
    }
}

#[async_trait]
impl MessageSender for MessengerAdapter {
    async fn send(&self, message: &OutboundMessage) -> Result<(), BotError> {
        #[derive(Serialize)]
        struct SendRequest {
            recipient: Recipient,
            message: MessageBody,
        }

        #[derive(Serialize)]
        struct Recipient {
            id: String,
        }

        #[derive(Serialize)]
        struct MessageBody {
            text: String,
        }

        let request = SendRequest {
            recipient: Recipient {
                id: message.recipient_id.clone(),
            },
            message: MessageBody {
                text: message.text.clone(),
            },
        };

        let response = self
            .client
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Network(format!(
                "Send API error: status {}, body: {}",
                status, body
            )));
        }

        tracing::debug!(recipient_id = %message.recipient_id, "message sent");
        Ok(())
    }
}
