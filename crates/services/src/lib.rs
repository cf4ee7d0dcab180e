#![forbid(unsafe_code)]

pub mod app_services;
pub mod chat;
pub mod countdown;
pub mod error;
pub mod session_service;

pub use roadmap_core::Clock;

pub use app_services::AppServices;
pub use chat::{
    API_KEY_ENV, BASE_URL_ENV, ChatConfig, ChatRelay, ChatTransport, EMPTY_REPLY_MESSAGE,
    FALLBACK_API_KEY_ENV, HttpChatTransport, MENTOR_PERSONA, MODEL_ENV, NOT_CONFIGURED_MESSAGE,
};
pub use countdown::Countdown;
pub use error::{AppServicesError, ChatError, SessionError};
pub use session_service::{SessionManager, SessionStatus, TickOutcome};
