use thiserror::Error;
use url::Url;

/// Default generative model for the mentor chat.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";

/// Default REST root of the generative-text service.
pub const DEFAULT_CHAT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the mentor conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Validated chat relay settings.
///
/// A missing key means the relay is not configured and must answer without
/// touching the network.
#[derive(Clone, PartialEq, Eq)]
pub struct ChatSettings {
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Clone, Debug, Default)]
pub struct ChatSettingsDraft {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChatSettingsError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ChatSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize blanks to defaults and validate the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ChatSettingsError::InvalidBaseUrl` if the base URL does not parse.
    pub fn validate(self) -> Result<ChatSettings, ChatSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model).unwrap_or_else(|| DEFAULT_CHAT_MODEL.into());
        let base_url =
            normalize_optional(self.base_url).unwrap_or_else(|| DEFAULT_CHAT_BASE_URL.into());

        if Url::parse(&base_url).is_err() {
            return Err(ChatSettingsError::InvalidBaseUrl(base_url));
        }

        Ok(ChatSettings {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl ChatSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_CHAT_MODEL.into(),
            base_url: DEFAULT_CHAT_BASE_URL.into(),
        }
    }
}

impl std::fmt::Debug for ChatSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSettings")
            .field("configured", &self.is_configured())
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
