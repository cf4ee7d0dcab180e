use std::sync::Arc;

use roadmap_core::model::Roadmap;
use services::{ChatRelay, SessionManager};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn roadmap(&self) -> Arc<Roadmap>;
    fn session(&self) -> Arc<SessionManager>;
    fn chat(&self) -> Arc<ChatRelay>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    roadmap: Arc<Roadmap>,
    session: Arc<SessionManager>,
    chat: Arc<ChatRelay>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            roadmap: app.roadmap(),
            session: app.session(),
            chat: app.chat(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn roadmap(&self) -> Arc<Roadmap> {
        Arc::clone(&self.roadmap)
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionManager> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatRelay> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
