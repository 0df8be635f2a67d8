//! Idempotency header names and key generation.
//!
//! Enforcement is opt-in on the server: requests without a key are processed
//! normally, and a replayed response carries [`REPLAYED_HEADER`] = `true`.

/// Request header carrying the client-generated key.
pub const KEY_HEADER: &str = "X-Idempotency-Key";

/// Response header set when the server served a cached prior result.
pub const REPLAYED_HEADER: &str = "X-Idempotency-Replayed";

/// A fresh random key (UUID v4, hyphenated).
#[must_use]
pub fn new_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Short form of a key for diagnostics.
#[must_use]
pub fn abbreviate(key: &str) -> String {
    let prefix: String = key.chars().take(8).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_uuids() {
        let a = new_key();
        let b = new_key();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn abbreviation_keeps_first_eight_chars() {
        assert_eq!(
            abbreviate("0123456789abcdef-rest"),
            "01234567..."
        );
    }
}
