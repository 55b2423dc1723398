//! Dialogflow ES provider - detect-intent over the REST API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::errors::ReplyError;
use crate::domain::entities::ReplyRequest;
use crate::infrastructure::backends::ReplyBackend;

/// Dialogflow API endpoint
const API_BASE: &str = "https://dialogflow.googleapis.com/v2";

/// Dialogflow ES backend.
///
/// Builds a session-scoped `detectIntent` query tagged with a fixed
/// language code and returns the fulfillment text.
pub struct DialogflowProvider {
    project_id: String,
    access_token: String,
    language_code: String,
    client: Client,
}

impl DialogflowProvider {
    pub fn new(
        project_id: impl Into<String>,
        access_token: impl Into<String>,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            access_token: access_token.into(),
            language_code: language_code.into(),
            client: Client::new(),
        }
    }

    /// Session path for the detect-intent URL
    fn session_url(&self, session_id: &str) -> String {
        format!(
            "{}/projects/{}/agent/sessions/{}:detectIntent",
            API_BASE, self.project_id, session_id
        )
    }
}

/// detectIntent request body
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentRequest {
    query_input: QueryInput,
}

#[derive(Serialize)]
struct QueryInput {
    text: TextInput,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextInput {
    text: String,
    language_code: String,
}

/// detectIntent response body
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DetectIntentResponse {
    query_result: Option<QueryResult>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct QueryResult {
    fulfillment_text: Option<String>,
}

#[async_trait]
impl ReplyBackend for DialogflowProvider {
    fn name(&self) -> &str {
        "dialogflow"
    }

    async fn generate(&self, request: &ReplyRequest) -> Result<String, ReplyError> {
        let body = DetectIntentRequest {
            query_input: QueryInput {
                text: TextInput {
                    text: request.text.clone(),
                    language_code: self.language_code.clone(),
                },
            },
        };

        let response = self
            .client
            .post(self.session_url(&request.session_id))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ReplyError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ReplyError::Api(format!("status: {}, body: {}", status, body)));
        }

        let detect_response: DetectIntentResponse = response
            .json()
            .await
            .map_err(|e| ReplyError::Parse(e.to_string()))?;

        tracing::debug!("dialogflow response: {:?}", detect_response.query_result);

        // Absent fulfillment is a valid (empty) result; the dispatcher
        // substitutes the "not sure" fallback.
        Ok(detect_response
            .query_result
            .and_then(|r| r.fulfillment_text)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_url_is_session_scoped() {
        let provider = DialogflowProvider::new("my-project", "token", "en");
        assert_eq!(
            provider.session_url("U1"),
            "https://dialogflow.googleapis.com/v2/projects/my-project/agent/sessions/U1:detectIntent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = DetectIntentRequest {
            query_input: QueryInput {
                text: TextInput {
                    text: "hello".to_string(),
                    language_code: "en".to_string(),
                },
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "queryInput": { "text": { "text": "hello", "languageCode": "en" } }
            })
        );
    }

    #[test]
    fn test_response_fulfillment_text_parsed() {
        let raw = r#"{"queryResult":{"fulfillmentText":"Hi!","intent":{"displayName":"greet"}}}"#;
        let response: DetectIntentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.query_result.and_then(|r| r.fulfillment_text),
            Some("Hi!".to_string())
        );
    }

    #[test]
    fn test_response_without_fulfillment() {
        let raw = r#"{"queryResult":{}}"#;
        let response: DetectIntentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.query_result.and_then(|r| r.fulfillment_text), None);
    }
}
