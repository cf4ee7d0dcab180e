use std::time::Duration as StdDuration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::warn;

use crate::error::SessionError;
use crate::session_service::{SessionManager, TickOutcome};

/// Drives `SessionManager::tick` once per period until the session ends.
///
/// Dropping the future returned by [`Countdown::run`] cancels it; the view
/// does this on unmount.
#[derive(Clone)]
pub struct Countdown {
    manager: SessionManager,
}

impl Countdown {
    pub const PERIOD: StdDuration = StdDuration::from_secs(1);

    #[must_use]
    pub fn new(manager: SessionManager) -> Self {
        Self { manager }
    }

    /// Tick until a terminal outcome, reporting every outcome to `on_tick`.
    ///
    /// The first tick fires one `PERIOD` after the call.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store fails; the countdown stops.
    pub async fn run<F>(self, mut on_tick: F) -> Result<TickOutcome, SessionError>
    where
        F: FnMut(&TickOutcome),
    {
        let mut ticker = interval_at(Instant::now() + Self::PERIOD, Self::PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let outcome = match self.manager.tick().await {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(error = %err, "countdown stopped on storage failure");
                    return Err(err);
                }
            };
            on_tick(&outcome);
            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use roadmap_core::time::{fixed_clock, fixed_now};
    use roadmap_core::model::encode_started_at;
    use storage::repository::{InMemorySessionStore, SessionKey, SessionStore};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn countdown_ticks_every_second_while_running() {
        let store = InMemorySessionStore::new();
        let manager = SessionManager::new(fixed_clock(), Arc::new(store.clone()));
        manager.login("alpha", "key").await.unwrap();

        let mut ticks = 0_u32;
        let run = Countdown::new(manager).run(|outcome| {
            assert!(matches!(outcome, TickOutcome::Running { .. }));
            ticks += 1;
        });
        let result = tokio::time::timeout(StdDuration::from_millis(3_500), run).await;

        assert!(result.is_err(), "countdown should still be running");
        assert_eq!(ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_stops_after_expiry() {
        let store = InMemorySessionStore::new();
        let started = fixed_now() - Duration::hours(4);
        store.write(SessionKey::User, "alpha").await.unwrap();
        store
            .write(SessionKey::Start, &encode_started_at(started))
            .await
            .unwrap();
        let manager = SessionManager::new(fixed_clock(), Arc::new(store.clone()));

        let mut seen = Vec::new();
        let outcome = Countdown::new(manager.clone())
            .run(|outcome| seen.push(outcome.clone()))
            .await
            .unwrap();

        assert_eq!(outcome, TickOutcome::Expired);
        assert_eq!(seen, vec![TickOutcome::Expired]);
        assert!(manager.is_locked_out().await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_stops_when_session_is_cleared() {
        let store = InMemorySessionStore::new();
        let manager = SessionManager::new(fixed_clock(), Arc::new(store.clone()));

        let outcome = Countdown::new(manager).run(|_| {}).await.unwrap();
        assert_eq!(outcome, TickOutcome::Idle);
    }
}
