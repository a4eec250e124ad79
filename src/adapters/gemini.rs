use crate::config::AdvisoryConfig;
use crate::domain::ports::TextGenerator;
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// `generateContent` client for the Gemini REST API. One attempt per call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: AdvisoryConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: AdvisoryConfig) -> Result<Self> {
        if !config.has_credential() {
            tracing::warn!("⚠️ No API key configured; advisory requests will use fallback text");
        }

        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let endpoint = self.endpoint();
        tracing::debug!("Making generation request to: {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Generation response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TrackerError::ServiceError {
                status: status.as_u16(),
                message: error_message(&message),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.text().ok_or(TrackerError::EmptyCompletion)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

/// Pulls `error.message` out of a Gemini error body, or returns the body as is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate; `None` when there is no text.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn client_for(server: &MockServer, api_key: &str) -> GeminiClient {
        GeminiClient::new(AdvisoryConfig {
            api_key: api_key.to_string(),
            model: "gemini-test".to_string(),
            base_url: server.base_url(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_successful_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-test:generateContent")
                .header("x-goog-api-key", "test-key")
                .json_body(serde_json::json!({
                    "contents": [{"role": "user", "parts": [{"text": "Say hi"}]}]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{
                        "content": {"parts": [{"text": "Hi!\n"}, {"text": "Welcome."}], "role": "model"},
                        "finishReason": "STOP"
                    }]
                }));
        });

        let client = client_for(&server, "test-key");
        let text = client.generate("Say hi").await.unwrap();

        api_mock.assert();
        assert_eq!(text, "Hi!\nWelcome.");
        assert_eq!(client.model(), "gemini-test");
    }

    #[tokio::test]
    async fn test_generate_auth_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/v1beta/models/gemini-test:generateContent");
            then.status(401).json_body(serde_json::json!({
                "error": {"code": 401, "message": "API key not valid", "status": "UNAUTHENTICATED"}
            }));
        });

        let client = client_for(&server, "");
        let err = client.generate("Say hi").await.unwrap_err();

        api_mock.assert();
        match err {
            TrackerError::ServiceError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_no_candidates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(serde_json::json!({"candidates": []}));
        });

        let err = client_for(&server, "k").generate("x").await.unwrap_err();
        assert!(matches!(err, TrackerError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        });

        let err = client_for(&server, "k").generate("x").await.unwrap_err();
        assert!(matches!(err, TrackerError::ApiError(_)));
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("upstream exploded"), "upstream exploded");
        assert_eq!(
            error_message(r#"{"error":{"message":"quota"}}"#),
            "quota"
        );
    }
}
