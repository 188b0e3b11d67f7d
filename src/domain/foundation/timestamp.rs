//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// The moment `duration` before now, clamped to the earliest
    /// representable instant.
    pub fn ago(duration: std::time::Duration) -> Self {
        let at = chrono::Duration::from_std(duration)
            .ok()
            .and_then(|delta| Utc::now().checked_sub_signed(delta))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self(at)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// RFC 3339 rendering used in API responses.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn earlier_timestamp_is_before_later() {
        let earlier = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 2, 14, 9, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 2, 14, 18, 0, 0).unwrap());
        assert!(earlier.is_before(&later));
        assert!(!later.is_before(&earlier));
    }

    #[test]
    fn ago_is_in_the_past() {
        let hour_ago = Timestamp::ago(std::time::Duration::from_secs(3600));
        assert!(hour_ago.is_before(&Timestamp::now()));
        assert!(Timestamp::ago(std::time::Duration::MAX).is_before(&hour_ago));
    }

    #[test]
    fn renders_rfc3339() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap());
        assert_eq!(ts.to_rfc3339(), "2026-02-14T09:30:00+00:00");
    }
}
