use chrono::{DateTime, Duration, NaiveDate, Utc};
use thiserror::Error;

/// Maximum continuous login duration, in seconds (4 hours).
const SESSION_LIMIT_SECS: i64 = 4 * 60 * 60;

/// Calendar-date layout of the persisted lockout marker (`Mon Oct 19 2026`).
const LOCKOUT_DATE_FORMAT: &str = "%a %b %d %Y";

/// The fixed session cap as a `Duration`.
fn session_limit() -> Duration {
    Duration::seconds(SESSION_LIMIT_SECS)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("operator id and access key are required")]
    Missing,
}

/// Login form input that passed the presence check.
///
/// The access key is only checked for presence; it is never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identity: String,
}

impl Credentials {
    /// Validate raw login input.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError::Missing` if either field is empty after trimming.
    pub fn new(identity: &str, secret: &str) -> Result<Self, CredentialsError> {
        let identity = identity.trim();
        if identity.is_empty() || secret.trim().is_empty() {
            return Err(CredentialsError::Missing);
        }
        Ok(Self {
            identity: identity.to_string(),
        })
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    /// The operator disconnected.
    User,
    /// The session cap elapsed; records a lockout for the day.
    Lockout,
    /// Persisted state was inconsistent (identity without a start time).
    Corrupted,
}

impl LogoutReason {
    #[must_use]
    pub const fn records_lockout(self) -> bool {
        matches!(self, Self::Lockout)
    }
}

/// A logged-in operator and the moment the session began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    identity: String,
    started_at: DateTime<Utc>,
}

impl ActiveSession {
    #[must_use]
    pub fn new(identity: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            identity: identity.into(),
            started_at,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// `limit - (now - start)`.
    ///
    /// A clock that reads earlier than the start never yields more than the
    /// full limit.
    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        let elapsed = (now - self.started_at).max(Duration::zero());
        session_limit() - elapsed
    }
}

/// Serialize a session start as epoch milliseconds.
#[must_use]
pub fn encode_started_at(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

/// Parse a persisted session start.
///
/// Missing, zero, negative or malformed values are all treated as absent.
#[must_use]
pub fn decode_started_at(raw: &str) -> Option<DateTime<Utc>> {
    let millis = raw.trim().parse::<i64>().ok()?;
    if millis <= 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// The calendar day a lockout applies to (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LockoutDate(NaiveDate);

impl LockoutDate {
    #[must_use]
    pub fn of(at: DateTime<Utc>) -> Self {
        Self(at.date_naive())
    }

    /// Persisted marker text, e.g. `Mon Oct 19 2026`.
    #[must_use]
    pub fn to_marker(&self) -> String {
        self.0.format(LOCKOUT_DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn parse_marker(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw.trim(), LOCKOUT_DATE_FORMAT)
            .ok()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(Credentials::new("", "key").unwrap_err(), CredentialsError::Missing);
        assert_eq!(Credentials::new("alpha", "").unwrap_err(), CredentialsError::Missing);
        assert_eq!(Credentials::new("  ", " ").unwrap_err(), CredentialsError::Missing);
        let creds = Credentials::new(" alpha ", "hunter2").unwrap();
        assert_eq!(creds.identity(), "alpha");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[test]
    fn remaining_counts_down_to_zero_at_cap() {
        let start = fixed_now();
        let session = ActiveSession::new("alpha", start);
        assert_eq!(session.remaining_at(start), Duration::hours(4));
        assert_eq!(
            session.remaining_at(start + Duration::seconds(1)),
            Duration::hours(4) - Duration::seconds(1)
        );
        assert_eq!(
            session.remaining_at(start + Duration::hours(4) - Duration::seconds(1)),
            Duration::seconds(1)
        );
        assert_eq!(session.remaining_at(start + Duration::hours(4)), Duration::zero());
    }

    #[test]
    fn remaining_never_exceeds_limit_when_clock_is_behind() {
        let start = fixed_now();
        let session = ActiveSession::new("alpha", start);
        assert_eq!(session.remaining_at(start - Duration::minutes(5)), session_limit());
    }

    #[test]
    fn started_at_round_trips_and_rejects_garbage() {
        let now = fixed_now();
        assert_eq!(decode_started_at(&encode_started_at(now)), Some(now));
        assert_eq!(decode_started_at("0"), None);
        assert_eq!(decode_started_at(""), None);
        assert_eq!(decode_started_at("soon"), None);
        assert_eq!(decode_started_at("-5"), None);
    }

    #[test]
    fn lockout_marker_uses_calendar_day_text() {
        // 2023-11-14T22:13:20Z
        let date = LockoutDate::of(fixed_now());
        assert_eq!(date.to_marker(), "Tue Nov 14 2023");
        assert_eq!(LockoutDate::parse_marker("Tue Nov 14 2023"), Some(date));
        assert_eq!(LockoutDate::parse_marker("yesterday"), None);
    }
}
