//! Opaque cursors for the asthma-event feed.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Error type for cursor parsing.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("cursor is not valid base64")]
    Encoding,
    #[error("cursor payload is malformed")]
    Malformed,
    #[error("cursor timestamp is not RFC 3339")]
    Timestamp,
    #[error("cursor id is not an integer")]
    Id,
}

/// A position in the event feed: the `(recorded_at, id)` pair of the
/// last row the client saw.
///
/// The feed orders by `recorded_at DESC, id DESC`; carrying the row id
/// keeps paging stable when several events share a timestamp. The wire
/// form is base64 over `<rfc3339-micros>|<id>` so clients treat it as
/// opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCursor {
    pub recorded_at: DateTime<Utc>,
    pub id: i64,
}

impl EventCursor {
    /// Encodes this position into its opaque wire form.
    pub fn encode(&self) -> String {
        let payload = format!(
            "{}|{}",
            self.recorded_at
                .to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            self.id
        );
        URL_SAFE_NO_PAD.encode(payload.as_bytes())
    }

    /// Parses a wire-form cursor back into a feed position.
    pub fn parse(raw: &str) -> Result<Self, CursorError> {
        let decoded = URL_SAFE_NO_PAD
            .decode(raw)
            .map_err(|_| CursorError::Encoding)?;
        let payload = String::from_utf8(decoded).map_err(|_| CursorError::Malformed)?;

        let (timestamp_part, id_part) =
            payload.split_once('|').ok_or(CursorError::Malformed)?;

        let recorded_at = DateTime::parse_from_rfc3339(timestamp_part)
            .map_err(|_| CursorError::Timestamp)?
            .with_timezone(&Utc);

        let id: i64 = id_part.parse().map_err(|_| CursorError::Id)?;

        Ok(Self { recorded_at, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cursor_roundtrip() {
        let cursor = EventCursor {
            recorded_at: Utc.with_ymd_and_hms(2026, 8, 25, 14, 0, 0).unwrap(),
            id: 12345,
        };

        let parsed = EventCursor::parse(&cursor.encode()).unwrap();
        assert_eq!(parsed, cursor);
    }

    #[test]
    fn test_parse_rejects_non_base64() {
        assert!(matches!(
            EventCursor::parse("!!not-base64!!"),
            Err(CursorError::Encoding)
        ));
    }

    #[test]
    fn test_parse_rejects_payload_without_separator() {
        let raw = URL_SAFE_NO_PAD.encode(b"2026-08-25T14:00:00.000000Z");
        assert!(matches!(
            EventCursor::parse(&raw),
            Err(CursorError::Malformed)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        let raw = URL_SAFE_NO_PAD.encode(b"not-a-timestamp|42");
        assert!(matches!(
            EventCursor::parse(&raw),
            Err(CursorError::Timestamp)
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        let raw = URL_SAFE_NO_PAD.encode(b"2026-08-25T14:00:00.000000Z|abc");
        assert!(matches!(EventCursor::parse(&raw), Err(CursorError::Id)));
    }
}
