use std::sync::Arc;

use roadmap_core::catalog::builtin_roadmap;
use roadmap_core::model::Roadmap;
use storage::repository::Storage;

use crate::chat::{ChatConfig, ChatRelay};
use crate::error::AppServicesError;
use crate::session_service::SessionManager;
use crate::Clock;

/// Assembles app-facing services around the built-in curriculum.
#[derive(Clone)]
pub struct AppServices {
    roadmap: Arc<Roadmap>,
    session: Arc<SessionManager>,
    chat: Arc<ChatRelay>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// built-in content is inconsistent.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        chat: Option<ChatConfig>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, ChatRelay::new(chat))
    }

    /// Wire services over an existing storage aggregate.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the built-in content is inconsistent.
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        chat: ChatRelay,
    ) -> Result<Self, AppServicesError> {
        let roadmap = Arc::new(builtin_roadmap()?);
        let session = Arc::new(SessionManager::new(clock, Arc::clone(&storage.session)));
        Ok(Self {
            roadmap,
            session,
            chat: Arc::new(chat),
        })
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_service::SessionStatus;
    use roadmap_core::time::fixed_clock;

    #[tokio::test]
    async fn in_memory_services_share_one_store() {
        let storage = Storage::in_memory();
        let services =
            AppServices::from_storage(&storage, fixed_clock(), ChatRelay::new(None)).unwrap();
        assert_eq!(services.roadmap().phases().len(), 3);
        assert!(!services.chat().enabled());

        services.session().login("alpha", "key").await.unwrap();
        let again = services.clone();
        assert!(matches!(
            again.session().restore().await.unwrap(),
            SessionStatus::Active(_)
        ));
    }
}
