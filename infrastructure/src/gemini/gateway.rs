//! Gemini gateway implementation
//!
//! Implements the [`TranslationGateway`] port against the Generative Language
//! REST API (`models/{model}:generateContent`). One call, one HTTP request;
//! timeouts are enforced by the HTTP client and nothing is retried.

use super::types::{GenerateContentRequest, GenerateContentResponse, error_message};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use nededi_application::{GatewayError, GenerationRequest, TranslationGateway};
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gateway to the Gemini `generateContent` endpoint
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiGateway {
    /// Create a gateway with its own HTTP client.
    ///
    /// An empty `api_key` is accepted; the provider will reject the call and
    /// the rejection surfaces as [`GatewayError::RequestFailed`].
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ne-dedi/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, base_url, api_key, timeout))
    }

    /// Create a gateway around an existing client.
    ///
    /// `timeout` is only used to label timeout errors; the client's own
    /// settings decide when a request is abandoned.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Build from the `[gemini]` config section, reading the API key once.
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().unwrap_or_else(|| {
            warn!(
                "No Gemini API key found (checked config and ${}); requests will be rejected",
                config.api_key_env
            );
            String::new()
        });
        Self::new(&config.base_url, api_key, config.timeout())
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.timeout.as_secs())
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::Other(e.to_string())
        }
    }
}

#[async_trait]
impl TranslationGateway for GeminiGateway {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, GatewayError> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from(request);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text).unwrap_or_else(|| {
                if text.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Unknown").to_string()
                } else {
                    text
                }
            });
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout(self.timeout.as_secs())
            } else {
                GatewayError::InvalidResponse(e.to_string())
            }
        })?;

        if let Some(reason) = parsed.block_reason() {
            warn!("Gemini blocked the prompt: {}", reason);
        }
        debug!(
            "Gemini finished: {}",
            parsed.finish_reason().unwrap_or("unknown")
        );

        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-test".to_string(),
            system_instruction: "be witty".to_string(),
            prompt: "Translate this phrase: \"I'm fine.\"".to_string(),
            response_schema: json!({"type": "OBJECT"}),
        }
    }

    fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    /// Read one HTTP request (headers + Content-Length body).
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Serve exactly one canned response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let raw = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = tx.send(raw);
        });
        (base_url, rx)
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = GeminiGateway::with_client(
            client(),
            "https://example.test/",
            "key",
            Duration::from_secs(30),
        );
        assert_eq!(
            gateway.endpoint("gemini-3-flash-preview"),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_success_returns_text_and_sends_key() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"vibe\":\"calm\"}" }] },
                "finishReason": "STOP"
            }]
        })
        .to_string();
        let (base_url, raw_request) = serve_once("200 OK", body).await;
        let gateway =
            GeminiGateway::with_client(client(), base_url, "secret-key", Duration::from_secs(2));

        let text = gateway.generate(&request()).await.unwrap();
        assert_eq!(text.as_deref(), Some("{\"vibe\":\"calm\"}"));

        let raw = raw_request.await.unwrap();
        assert!(raw.starts_with("POST /v1beta/models/gemini-test:generateContent"));
        assert!(raw.to_lowercase().contains("x-goog-api-key: secret-key"));
        assert!(raw.contains("\"responseMimeType\":\"application/json\""));
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_failed() {
        let body = json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })
        .to_string();
        let (base_url, _raw) = serve_once("400 Bad Request", body).await;
        let gateway = GeminiGateway::with_client(client(), base_url, "", Duration::from_secs(2));

        match gateway.generate(&request()).await {
            Err(GatewayError::RequestFailed { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid. (INVALID_ARGUMENT)");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt_has_no_text() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
        let (base_url, _raw) = serve_once("200 OK", body).await;
        let gateway = GeminiGateway::with_client(client(), base_url, "k", Duration::from_secs(2));

        assert_eq!(gateway.generate(&request()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let gateway = GeminiGateway::with_client(client(), base_url, "k", Duration::from_secs(2));
        assert!(matches!(
            gateway.generate(&request()).await,
            Err(GatewayError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let _ = read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(300))
            .build()
            .unwrap();
        let gateway = GeminiGateway::with_client(client, base_url, "k", Duration::from_secs(1));
        assert!(matches!(
            gateway.generate(&request()).await,
            Err(GatewayError::Timeout(1))
        ));
    }

    #[tokio::test]
    async fn test_from_config_applies_timeout_and_empty_key() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let _ = tx.send(read_request(&mut socket).await);
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let config = FileGeminiConfig {
            api_key_env: "NEDEDI_TEST_GATEWAY_UNSET_KEY".to_string(),
            api_key: None,
            base_url,
            timeout_secs: 1,
            ..Default::default()
        };
        let gateway = GeminiGateway::from_config(&config).unwrap();

        assert!(matches!(
            gateway.generate(&request()).await,
            Err(GatewayError::Timeout(1))
        ));
        let raw = rx.await.unwrap().to_lowercase();
        assert!(raw.contains("x-goog-api-key: \r\n") || raw.contains("x-goog-api-key:\r\n"));
    }
}
