use std::time::Duration;

use roadmap_core::model::Credentials;
use services::SessionError;

/// Simulated authentication time before the session starts.
pub const AUTH_DELAY: Duration = Duration::from_millis(1_500);

pub const CREDENTIALS_REQUIRED: &str = "CREDENTIALS REQUIRED";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginPhase {
    Idle,
    Authenticating,
    Failed(&'static str),
}

impl LoginPhase {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        match self {
            Self::Failed(message) => Some(*message),
            _ => None,
        }
    }
}

/// Presence check run before the authentication delay.
///
/// # Errors
///
/// Returns the inline message when either field is blank.
pub fn check_form(identity: &str, secret: &str) -> Result<(), &'static str> {
    Credentials::new(identity, secret)
        .map(|_| ())
        .map_err(|_| CREDENTIALS_REQUIRED)
}

/// Inline message for a failed login.
#[must_use]
pub fn login_error_message(err: &SessionError) -> &'static str {
    match err {
        SessionError::InvalidCredentials(_) => CREDENTIALS_REQUIRED,
        SessionError::LockedOut => "SYSTEM LOCKDOWN ACTIVE",
        _ => "LINK FAILURE // RETRY",
    }
}

/// `AGENT: <IDENTITY>` badge text.
#[must_use]
pub fn agent_label(identity: &str) -> String {
    format!("AGENT: {}", identity.to_uppercase())
}
