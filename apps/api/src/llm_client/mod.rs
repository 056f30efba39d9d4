/// Model Gateway — the single point of entry for all model API calls in HR360.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All model interactions MUST go through a `ModelGateway`.
///
/// One call per prompt. No retry, no backoff, no response cache: a failure is
/// terminal for the chain that issued it.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
#[cfg(test)]
pub mod scripted;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Model used when `ANTHROPIC_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-200 response. `body` is kept verbatim for display.
    #[error("API Error: {status} - {body}")]
    Http { status: u16, body: String },

    #[error("unreadable response envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("model returned no text content")]
    EmptyContent,
}

/// A fully composed prompt, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub system: Option<&'static str>,
}

impl Prompt {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            system: None,
        }
    }

    pub fn with_system(text: impl Into<String>, system: &'static str) -> Self {
        Self {
            text: text.into(),
            system: Some(system),
        }
    }
}

/// Anything that can turn a prompt into raw model text.
///
/// Carried in `AppState` as `Arc<dyn ModelGateway>`.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GatewayError>;

    /// Model identifier sent with every call.
    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl MessagesResponse {
    /// Text of the first generated block.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .first()
            .filter(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

/// Settings for [`AnthropicGateway`].
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

/// Gateway backed by the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicGateway {
    client: Client,
    settings: GatewaySettings,
}

impl AnthropicGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    fn request_body<'a>(&'a self, prompt: &'a Prompt) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            system: prompt.system,
            messages: vec![Message {
                role: "user",
                content: &prompt.text,
            }],
        }
    }
}

#[async_trait]
impl ModelGateway for AnthropicGateway {
    async fn complete(&self, prompt: &Prompt) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(&self.settings.api_url)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() != 200 {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Model call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(GatewayError::EmptyContent)
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use tokio::net::TcpListener;

    use super::*;

    fn gateway_at(api_url: String) -> AnthropicGateway {
        AnthropicGateway::new(GatewaySettings {
            api_key: "test-key".to_string(),
            api_url,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn gateway() -> AnthropicGateway {
        gateway_at(DEFAULT_API_URL.to_string())
    }

    /// Serves a fixed status and body on `/v1/messages`; returns the endpoint URL.
    async fn stub_api(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/v1/messages", post(move || async move { (status, body) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1/messages")
    }

    #[tokio::test]
    async fn test_complete_returns_first_text_block_and_sends_headers() {
        let app = Router::new().route(
            "/v1/messages",
            post(|headers: HeaderMap, body: String| async move {
                let request: serde_json::Value = serde_json::from_str(&body).unwrap();
                let ok = headers.get("x-api-key").map(|v| v.as_bytes()) == Some(b"test-key".as_slice())
                    && headers.get("anthropic-version").map(|v| v.as_bytes())
                        == Some(ANTHROPIC_VERSION.as_bytes())
                    && request["messages"][0]["content"] == "List skills";
                let text = if ok { "[\"Rust\"]" } else { "bad request shape" };
                serde_json::json!({"content": [{"type": "text", "text": text}]}).to_string()
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let gw = gateway_at(format!("http://{addr}/v1/messages"));
        let text = gw.complete(&Prompt::user("List skills")).await.unwrap();
        assert_eq!(text, "[\"Rust\"]");
    }

    #[tokio::test]
    async fn test_complete_non_200_keeps_status_and_body_verbatim() {
        let url = stub_api(
            StatusCode::from_u16(529).unwrap(),
            r#"{"type":"error","error":{"type":"overloaded_error"}}"#,
        )
        .await;
        let err = gateway_at(url).complete(&Prompt::user("p")).await.unwrap_err();
        match err {
            GatewayError::Http { status, body } => {
                assert_eq!(status, 529);
                assert_eq!(body, r#"{"type":"error","error":{"type":"overloaded_error"}}"#);
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_empty_content_is_empty_content() {
        let url = stub_api(StatusCode::OK, r#"{"content":[]}"#).await;
        let err = gateway_at(url).complete(&Prompt::user("p")).await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyContent));
    }

    #[tokio::test]
    async fn test_complete_unparseable_envelope() {
        let url = stub_api(StatusCode::OK, "<html>gateway timeout</html>").await;
        let err = gateway_at(url).complete(&Prompt::user("p")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Envelope(_)));
    }

    #[tokio::test]
    async fn test_complete_connection_refused_is_transport() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = gateway_at(format!("http://{addr}/v1/messages"))
            .complete(&Prompt::user("p"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[test]
    fn test_request_body_includes_system_directive_when_present() {
        let gw = gateway();
        let prompt = Prompt::with_system("List skills", "Return JSON");
        let value = serde_json::to_value(gw.request_body(&prompt)).unwrap();

        assert_eq!(value["model"], DEFAULT_MODEL);
        assert_eq!(value["max_tokens"], 4000);
        assert_eq!(value["system"], "Return JSON");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "List skills");
    }

    #[test]
    fn test_request_body_omits_system_when_absent() {
        let gw = gateway();
        let prompt = Prompt::user("Write a job description");
        let value = serde_json::to_value(gw.request_body(&prompt)).unwrap();
        assert!(value.get("system").is_none());
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_first_text_reads_first_block_only() {
        let json = r#"{
            "content": [
                {"type": "text", "text": "[\"Rust\"]"},
                {"type": "text", "text": "ignored"}
            ],
            "usage": {"input_tokens": 12, "output_tokens": 4}
        }"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("[\"Rust\"]"));
    }

    #[test]
    fn test_first_text_none_for_empty_content() {
        let response: MessagesResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_http_error_display_keeps_body_verbatim() {
        let err = GatewayError::Http {
            status: 529,
            body: r#"{"type":"error","error":{"type":"overloaded_error"}}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"API Error: 529 - {"type":"error","error":{"type":"overloaded_error"}}"#
        );
    }
}
