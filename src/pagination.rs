//! Keyset pagination primitives.
//!
//! List results are windowed with an opaque continuation token rather than an
//! offset. The token encodes the position of the last row handed out under
//! the default ordering (`created_at` descending, id as tiebreaker); it is
//! base64-of-JSON, readable but not signed, and a corrupt token simply means
//! "start from the first page".

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Position marker for one request/response round trip.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaginationCursor {
    pub last_id: Uuid,
    pub last_created_at: NaiveDateTime,
}

impl PaginationCursor {
    pub fn new(last_id: Uuid, last_created_at: NaiveDateTime) -> Self {
        Self {
            last_id,
            last_created_at,
        }
    }

    /// Serializes the cursor to an opaque token. Deterministic and reversible.
    pub fn encode(&self) -> String {
        // A two-field struct with serde-friendly types cannot fail to encode.
        let json = serde_json::to_vec(self).unwrap_or_default();
        BASE64.encode(json)
    }

    /// Decodes a token produced by [`PaginationCursor::encode`].
    ///
    /// Malformed input of any kind yields `None`; callers treat that as an
    /// absent cursor instead of surfacing an error.
    pub fn decode(token: &str) -> Option<Self> {
        let bytes = BASE64.decode(token.trim()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// One page of repository results.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// At most `page_size` rows in the requested order.
    pub items: Vec<T>,
    /// Exact count of the filtered set, independent of the window.
    pub total: usize,
    /// Token for the next page, or `None` at the end of the results.
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn cursor() -> PaginationCursor {
        PaginationCursor::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_milli_opt(12, 30, 45, 678)
                .unwrap(),
        )
    }

    #[test]
    fn encode_decode_round_trip() {
        let original = cursor();
        let token = original.encode();
        assert_eq!(PaginationCursor::decode(&token), Some(original));
    }

    #[test]
    fn encoding_is_deterministic() {
        let c = cursor();
        assert_eq!(c.encode(), c.encode());
    }

    #[test]
    fn garbage_tokens_decode_to_none() {
        for token in [
            "",
            "not base64 !!!",
            "aGVsbG8=",                   // valid base64, not JSON
            "eyJmb28iOiJiYXIifQ==",       // valid JSON, wrong shape
            "====",
        ] {
            assert_eq!(PaginationCursor::decode(token), None, "token: {token:?}");
        }
    }
}
