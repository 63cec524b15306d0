//! API key records.

use serde::{Deserialize, Serialize};

/// An application-issued API key and its metadata.
///
/// Keys are compared with exact, case-sensitive string equality everywhere.
/// An inactive record stays in the registry but can no longer authorize
/// generation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// The opaque key value presented by callers.
    pub key: String,
    /// Who the key was issued to. May be empty.
    #[serde(default)]
    pub owner: String,
    /// Whether the key may be used for generation.
    pub active: bool,
    /// Free-form admin note. May be empty.
    #[serde(default)]
    pub note: String,
}

impl ApiKeyRecord {
    /// Create a new, active record.
    pub fn new(key: impl Into<String>, owner: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            owner: owner.into(),
            active: true,
            note: note.into(),
        }
    }

    /// Case-insensitive substring match on key or owner.
    ///
    /// `needle` is expected to be lowercased already.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.key.to_lowercase().contains(needle) || self.owner.to_lowercase().contains(needle)
    }
}

/// Shorten a key for log output.
///
/// Keeps the first four characters and replaces the rest with an ellipsis.
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    if prefix.len() == key.len() {
        "****".to_string()
    } else {
        format!("{prefix}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_active() {
        let record = ApiKeyRecord::new("k1", "alice", "");
        assert!(record.active);
        assert_eq!(record.owner, "alice");
        assert!(record.note.is_empty());
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let record: ApiKeyRecord = serde_json::from_str(r#"{"key":"k","active":false}"#).unwrap();
        assert_eq!(record.key, "k");
        assert!(!record.active);
        assert!(record.owner.is_empty());
    }

    #[test]
    fn mask_key_hides_short_and_long_keys() {
        assert_eq!(mask_key("abc"), "****");
        assert_eq!(mask_key("sk-live-123456"), "sk-l…");
    }

    #[test]
    fn search_matches_owner_case_insensitively() {
        let record = ApiKeyRecord::new("k1", "Alice", "");
        assert!(record.matches_search("ali"));
        assert!(!record.matches_search("bob"));
    }
}
