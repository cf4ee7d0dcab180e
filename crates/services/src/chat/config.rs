use std::env;

use secrecy::{ExposeSecret, SecretString};

use roadmap_core::model::{ChatSettings, ChatSettingsDraft, ChatSettingsError};

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "CYBERSHIELD_AI_API_KEY";
/// Legacy credential variable, read when `API_KEY_ENV` is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";
pub const MODEL_ENV: &str = "CYBERSHIELD_AI_MODEL";
pub const BASE_URL_ENV: &str = "CYBERSHIELD_AI_BASE_URL";

/// Credential and endpoint for the generative-text service.
#[derive(Clone)]
pub struct ChatConfig {
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl ChatConfig {
    /// `None` when the settings carry no key.
    #[must_use]
    pub fn from_settings(settings: &ChatSettings) -> Option<Self> {
        let api_key = settings.api_key()?;
        Some(Self {
            api_key: SecretString::from(api_key.to_owned()),
            model: settings.model().to_owned(),
            base_url: settings.base_url().to_owned(),
        })
    }

    /// Read the relay settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ChatSettingsError` if the base URL override does not parse.
    pub fn from_env() -> Result<Option<Self>, ChatSettingsError> {
        let draft = ChatSettingsDraft {
            api_key: env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .or_else(|| env::var(FALLBACK_API_KEY_ENV).ok()),
            model: env::var(MODEL_ENV).ok(),
            base_url: env::var(BASE_URL_ENV).ok(),
        };
        let settings = draft.validate()?;
        Ok(Self::from_settings(&settings))
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
