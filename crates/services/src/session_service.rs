use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use roadmap_core::model::{
    ActiveSession, Credentials, LockoutDate, LogoutReason, decode_started_at, encode_started_at,
};
use storage::repository::{SessionKey, SessionStore};

use crate::Clock;
use crate::error::SessionError;

/// What the login gate should show after restoring persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Active(ActiveSession),
    LockedOut,
    SignedOut,
}

/// Result of one countdown step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session still running with this much time left.
    Running { remaining: Duration },
    /// Cap reached; the session was cleared and today's lockout recorded.
    Expired,
    /// Identity present without a usable start; the session was cleared.
    Corrupted,
    /// Nothing to count down.
    Idle,
}

impl TickOutcome {
    /// Whether the countdown should stop after this step.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running { .. })
    }
}

enum Persisted {
    Missing,
    Corrupted,
    Valid(ActiveSession),
}

/// Owns the login gate: credentials check, 4-hour cap and daily lockout.
///
/// All state lives in the injected `SessionStore`; the manager itself is
/// cheap to clone and holds only the clock.
#[derive(Clone)]
pub struct SessionManager {
    clock: Clock,
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn SessionStore>) -> Self {
        Self { clock, store }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start a session for `identity`.
    ///
    /// The secret is only checked for presence. If a valid session is already
    /// persisted it is returned unchanged, so the start time never moves
    /// backwards or forwards while logged in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCredentials` if either field is blank,
    /// `SessionError::LockedOut` if today's lockout is recorded, or
    /// `SessionError::Storage` if the store fails.
    pub async fn login(&self, identity: &str, secret: &str) -> Result<ActiveSession, SessionError> {
        let credentials = Credentials::new(identity, secret)?;

        if self.is_locked_out().await? {
            info!(identity = credentials.identity(), "login refused: lockout active");
            return Err(SessionError::LockedOut);
        }

        match self.step().await? {
            (TickOutcome::Running { .. }, Some(existing)) => {
                debug!(identity = existing.identity(), "login reused active session");
                return Ok(existing);
            }
            (TickOutcome::Expired, _) => return Err(SessionError::LockedOut),
            _ => {}
        }

        let session = ActiveSession::new(credentials.identity(), self.clock.now());
        self.store
            .write(SessionKey::User, session.identity())
            .await?;
        self.store
            .write(SessionKey::Start, &encode_started_at(session.started_at()))
            .await?;

        info!(identity = session.identity(), "session started");
        Ok(session)
    }

    /// Resolve persisted state at launch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the store fails.
    pub async fn restore(&self) -> Result<SessionStatus, SessionError> {
        if self.is_locked_out().await? {
            if self.store.read(SessionKey::User).await?.is_some() {
                self.logout(LogoutReason::Lockout).await?;
            }
            return Ok(SessionStatus::LockedOut);
        }

        match self.step().await? {
            (TickOutcome::Running { .. }, Some(session)) => Ok(SessionStatus::Active(session)),
            (TickOutcome::Expired, _) => Ok(SessionStatus::LockedOut),
            _ => Ok(SessionStatus::SignedOut),
        }
    }

    /// Recompute the remaining time and enforce the cap.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the store fails.
    pub async fn tick(&self) -> Result<TickOutcome, SessionError> {
        Ok(self.step().await?.0)
    }

    async fn step(&self) -> Result<(TickOutcome, Option<ActiveSession>), SessionError> {
        match self.load().await? {
            Persisted::Missing => Ok((TickOutcome::Idle, None)),
            Persisted::Corrupted => {
                self.logout(LogoutReason::Corrupted).await?;
                Ok((TickOutcome::Corrupted, None))
            }
            Persisted::Valid(session) => {
                let remaining = session.remaining_at(self.clock.now());
                if remaining <= Duration::zero() {
                    self.logout(LogoutReason::Lockout).await?;
                    return Ok((TickOutcome::Expired, None));
                }
                debug!(remaining_secs = remaining.num_seconds(), "session tick");
                Ok((TickOutcome::Running { remaining }, Some(session)))
            }
        }
    }

    /// Clear the session; a `Lockout` reason also records today's date.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the store fails.
    pub async fn logout(&self, reason: LogoutReason) -> Result<(), SessionError> {
        if reason.records_lockout() {
            let today = self.clock.today();
            self.store
                .write(SessionKey::LockoutDate, &today.to_marker())
                .await?;
            info!(date = %today.to_marker(), "session cap reached, lockout recorded");
        }

        self.store.clear(SessionKey::User).await?;
        self.store.clear(SessionKey::Start).await?;

        match reason {
            LogoutReason::Corrupted => warn!("cleared corrupted session state"),
            _ => info!(?reason, "session ended"),
        }
        Ok(())
    }

    /// True iff the persisted lockout marker names today.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the store fails.
    pub async fn is_locked_out(&self) -> Result<bool, SessionError> {
        let Some(raw) = self.store.read(SessionKey::LockoutDate).await? else {
            return Ok(false);
        };
        match LockoutDate::parse_marker(&raw) {
            Some(date) => Ok(date == self.clock.today()),
            None => {
                warn!(marker = %raw, "ignoring unreadable lockout marker");
                Ok(false)
            }
        }
    }

    async fn load(&self) -> Result<Persisted, SessionError> {
        let Some(identity) = self.store.read(SessionKey::User).await? else {
            return Ok(Persisted::Missing);
        };
        let started_at = self
            .store
            .read(SessionKey::Start)
            .await?
            .as_deref()
            .and_then(decode_started_at);

        Ok(match started_at {
            Some(started_at) => Persisted::Valid(ActiveSession::new(identity, started_at)),
            None => Persisted::Corrupted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::time::{fixed_clock, fixed_now};
    use storage::repository::InMemorySessionStore;

    fn manager() -> (SessionManager, InMemorySessionStore) {
        let store = InMemorySessionStore::new();
        let manager = SessionManager::new(fixed_clock(), Arc::new(store.clone()));
        (manager, store)
    }

    #[tokio::test]
    async fn blank_credentials_leave_store_untouched() {
        let (manager, store) = manager();
        let err = manager.login("alpha", "   ").await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials(_)));
        assert_eq!(err.to_string(), "CREDENTIALS REQUIRED");
        assert!(store.read(SessionKey::User).await.unwrap().is_none());
        assert!(store.read(SessionKey::Start).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn login_persists_identity_and_start() {
        let (manager, store) = manager();
        let session = manager.login("alpha", "key").await.unwrap();
        assert_eq!(session.started_at(), fixed_now());
        assert_eq!(
            store.read(SessionKey::User).await.unwrap().as_deref(),
            Some("alpha")
        );
        assert_eq!(
            store.read(SessionKey::Start).await.unwrap(),
            Some(encode_started_at(fixed_now()))
        );
    }

    #[tokio::test]
    async fn second_login_keeps_original_start() {
        let (manager, store) = manager();
        manager.login("alpha", "key").await.unwrap();
        let later = SessionManager::new(
            fixed_clock().advanced_by(Duration::minutes(30)),
            Arc::new(store),
        );
        let again = later.login("bravo", "key").await.unwrap();
        assert_eq!(again.identity(), "alpha");
        assert_eq!(again.started_at(), fixed_now());
    }

    #[tokio::test]
    async fn identity_without_start_is_forced_out() {
        let (manager, store) = manager();
        store.write(SessionKey::User, "mallory").await.unwrap();
        assert_eq!(manager.tick().await.unwrap(), TickOutcome::Corrupted);
        assert!(store.read(SessionKey::User).await.unwrap().is_none());
        assert!(!manager.is_locked_out().await.unwrap());
    }

    #[tokio::test]
    async fn unreadable_lockout_marker_is_ignored() {
        let (manager, store) = manager();
        store.write(SessionKey::LockoutDate, "someday").await.unwrap();
        assert!(!manager.is_locked_out().await.unwrap());
    }

    #[test]
    fn only_running_is_non_terminal() {
        assert!(
            !TickOutcome::Running {
                remaining: Duration::seconds(1)
            }
            .is_terminal()
        );
        assert!(TickOutcome::Expired.is_terminal());
        assert!(TickOutcome::Corrupted.is_terminal());
        assert!(TickOutcome::Idle.is_terminal());
    }
}
