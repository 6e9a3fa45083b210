use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Newtype Wrappers - Identity
// =============================================================================

/// Unique identifier for a conversation participant.
///
/// Routers key their awaiting-input bookkeeping on this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Newtype Wrappers - Temporal
// =============================================================================

/// Unix timestamp in seconds since epoch.
///
/// Compared by value. Two Timestamps with the same inner value are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// `None` when the timestamp lies outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_ids_are_unique() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_participant_id_display_matches_uuid() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = ParticipantId(uuid);
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_participant_id_serde_roundtrip() {
        let id = ParticipantId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_timestamp_to_datetime_roundtrip() {
        let now = Utc::now();
        let ts = Timestamp::from_datetime(now);
        let dt = ts.to_datetime().unwrap();
        // Precision is seconds, so compare timestamps
        assert_eq!(dt.timestamp(), now.timestamp());
    }

    #[test]
    fn test_timestamp_out_of_chrono_range() {
        assert!(Timestamp(i64::MAX).to_datetime().is_none());
        assert!(Timestamp(i64::MIN).to_datetime().is_none());
        assert!(Timestamp(0).to_datetime().is_some());
    }

    #[test]
    fn test_timestamp_ordering() {
        assert!(Timestamp(10) < Timestamp(11));
        assert_eq!(Timestamp(5), Timestamp(5));
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(Timestamp(1_700_000_000).to_string(), "1700000000");
    }
}
