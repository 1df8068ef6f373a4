//! Simple-key validation.
//!
//! Keys starting with U+0000 are reserved for composite keys, which this
//! chaincode never writes and never scans.

use crate::StoreError;

/// Leading code point reserved for the composite-key namespace.
pub const COMPOSITE_KEY_NAMESPACE: char = '\u{0000}';

/// Check that `key` can be used as a simple world-state key.
pub fn validate_simple_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("key must not be an empty string".into()));
    }
    validate_range_bound(key)
}

/// Check a range-query bound. Empty bounds are allowed and mean "open".
pub fn validate_range_bound(key: &str) -> Result<(), StoreError> {
    if key.starts_with(COMPOSITE_KEY_NAMESPACE) {
        return Err(StoreError::InvalidKey(format!(
            "first character of the key [{}] must not be U+0000",
            key.escape_default()
        )));
    }
    Ok(())
}

/// Whether `key` falls inside `[start, end)` with empty bounds treated as open.
pub fn in_range(key: &str, start: &str, end: &str) -> bool {
    (start.is_empty() || key >= start) && (end.is_empty() || key < end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(validate_simple_key(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn composite_namespace_is_rejected() {
        assert!(validate_simple_key("\u{0000}vote\u{0000}1").is_err());
        assert!(validate_range_bound("\u{0000}").is_err());
    }

    #[test]
    fn ordinary_keys_pass() {
        assert!(validate_simple_key("asset1").is_ok());
        assert!(validate_range_bound("").is_ok());
    }

    #[test]
    fn open_bounds_cover_everything() {
        assert!(in_range("asset1", "", ""));
        assert!(in_range("asset1", "asset1", ""));
        assert!(!in_range("asset1", "", "asset1"));
        assert!(in_range("asset2", "asset1", "asset3"));
        assert!(!in_range("asset3", "asset1", "asset3"));
    }
}
