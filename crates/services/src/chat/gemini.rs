use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChatError;

use super::{ChatConfig, ChatTransport};

/// `generateContent` client for the Gemini REST API.
#[derive(Clone, Default)]
pub struct HttpChatTransport {
    client: Client,
}

impl HttpChatTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn generate(
        &self,
        config: &ChatConfig,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, ChatError> {
        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url().trim_end_matches('/'),
            config.model()
        );
        let payload = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model = config.model(), "sending chat request");
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", config.api_key())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ChatError::HttpStatus {
                status,
                message: error_message(&body),
            });
        }

        let body: GenerateResponse = response.json().await?;
        body.text().ok_or(ChatError::EmptyResponse)
    }
}

/// Pull `error.message` out of a failure body, falling back to the raw text.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message.trim().to_string())
        .unwrap_or_default();
    if !parsed.is_empty() {
        return parsed;
    }
    match body.trim() {
        "" => "no error details".to_string(),
        raw => raw.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, `None` if blank.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|part| part.text).collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_system_instruction() {
        let payload = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: "mentor".into() }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: "hi".into() }],
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "mentor");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Start with "},{"text":"nmap. "}]}}]}"#,
        )
        .unwrap();
        assert_eq!(body.text().as_deref(), Some("Start with nmap."));
    }

    #[test]
    fn blank_or_missing_candidates_yield_none() {
        let empty: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.text().is_none());
        let blank: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert!(blank.text().is_none());
    }

    #[test]
    fn failure_body_message_prefers_json_error() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(body),
            "API key not valid. Please pass a valid API key."
        );
        assert_eq!(error_message("upstream timeout\n"), "upstream timeout");
        assert_eq!(error_message(r#"{"error":{}}"#), r#"{"error":{}}"#);
        assert_eq!(error_message("  "), "no error details");
    }
}
