//! Mentor chat relay.
//!
//! `ChatRelay::send` always answers with text: a missing credential, an empty
//! reply and a transport failure each map to a fixed message instead of an
//! error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use roadmap_core::model::ChatMessage;

use crate::error::ChatError;

mod config;
mod gemini;

pub use config::{API_KEY_ENV, BASE_URL_ENV, ChatConfig, FALLBACK_API_KEY_ENV, MODEL_ENV};
pub use gemini::HttpChatTransport;

/// Reply when no credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "API key not configured. Please ensure it's provided in the environment.";

/// Reply when the service answers with no text.
pub const EMPTY_REPLY_MESSAGE: &str = "I couldn't generate a response. Please try again.";

/// System instruction sent with every prompt.
pub const MENTOR_PERSONA: &str = "You are a world-class Cybersecurity Mentor. \
Your goal is to help the user navigate a 3-month roadmap. \
Be concise, technical but clear, and encouraging. \
If the user asks about a lab, provide step-by-step guidance. \
If they ask about a project, suggest tools and architectures. \
Always promote ethical hacking and legal boundaries.";

/// One request/response exchange with a generative-text backend.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Generate a reply for `prompt` under `system_instruction`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError` if the request fails or the reply has no text.
    async fn generate(
        &self,
        config: &ChatConfig,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, ChatError>;
}

/// Forwards chat prompts to the configured transport.
#[derive(Clone)]
pub struct ChatRelay {
    config: Option<ChatConfig>,
    transport: Arc<dyn ChatTransport>,
}

impl ChatRelay {
    #[must_use]
    pub fn new(config: Option<ChatConfig>) -> Self {
        Self::with_transport(config, Arc::new(HttpChatTransport::new()))
    }

    #[must_use]
    pub fn with_transport(config: Option<ChatConfig>, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Send `prompt` and return the text to show in the chat window.
    ///
    /// `history` is accepted for the widget's convenience but each request is
    /// single-turn.
    pub async fn send(&self, prompt: &str, _history: &[ChatMessage]) -> String {
        let Some(config) = self.config.as_ref() else {
            info!("chat send skipped: relay not configured");
            return NOT_CONFIGURED_MESSAGE.to_string();
        };

        match self
            .transport
            .generate(config, MENTOR_PERSONA, prompt)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) | Err(ChatError::EmptyResponse) => EMPTY_REPLY_MESSAGE.to_string(),
            Err(err) => {
                warn!(error = %err, "chat request failed");
                format!("Error: {err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use roadmap_core::model::{ChatSettings, ChatSettingsDraft};

    struct CannedTransport {
        reply: Mutex<Option<Result<String, ChatError>>>,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CannedTransport {
        fn new(reply: Result<String, ChatError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatTransport for CannedTransport {
        async fn generate(
            &self,
            _config: &ChatConfig,
            system_instruction: &str,
            prompt: &str,
        ) -> Result<String, ChatError> {
            self.seen
                .lock()
                .unwrap()
                .push((system_instruction.to_string(), prompt.to_string()));
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(ChatError::EmptyResponse))
        }
    }

    fn configured() -> Option<ChatConfig> {
        let settings: ChatSettings = ChatSettingsDraft {
            api_key: Some("test-key".into()),
            ..ChatSettingsDraft::new()
        }
        .validate()
        .unwrap();
        ChatConfig::from_settings(&settings)
    }

    #[tokio::test]
    async fn reply_is_trimmed_and_persona_is_sent() {
        let transport = Arc::new(CannedTransport::new(Ok("  Use Wireshark.\n".into())));
        let relay = ChatRelay::with_transport(configured(), transport.clone());

        let history = vec![ChatMessage::user("earlier"), ChatMessage::model("reply")];
        let reply = relay.send("How do I capture DNS?", &history).await;

        assert_eq!(reply, "Use Wireshark.");
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, MENTOR_PERSONA);
        assert_eq!(seen[0].1, "How do I capture DNS?");
    }

    #[tokio::test]
    async fn empty_reply_uses_fallback() {
        let relay = ChatRelay::with_transport(
            configured(),
            Arc::new(CannedTransport::new(Ok("   ".into()))),
        );
        assert_eq!(relay.send("hi", &[]).await, EMPTY_REPLY_MESSAGE);

        let relay = ChatRelay::with_transport(
            configured(),
            Arc::new(CannedTransport::new(Err(ChatError::EmptyResponse))),
        );
        assert_eq!(relay.send("hi", &[]).await, EMPTY_REPLY_MESSAGE);
    }

    #[tokio::test]
    async fn transport_error_becomes_text() {
        let err = ChatError::HttpStatus {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            message: "Resource has been exhausted".into(),
        };
        let relay =
            ChatRelay::with_transport(configured(), Arc::new(CannedTransport::new(Err(err))));
        let reply = relay.send("hi", &[]).await;
        assert!(reply.starts_with("Error: "));
        assert!(reply.contains("429"));
        assert!(reply.contains("Resource has been exhausted"));
    }

    #[test]
    fn persona_keeps_ethics_clause() {
        assert!(MENTOR_PERSONA.contains("ethical hacking and legal boundaries"));
    }
}
