//! Domain Value Objects
//!
//! Immutable value types for the vocab domain.

use serde::Deserialize;
use std::fmt;

/// Word identifier, assigned by the store in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(i64);

impl WordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse a path segment; anything that is not an integer is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok().map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for WordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// What a dictionary lookup found for a word.
///
/// Either field may be missing; a failed lookup is `Pronunciation::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pronunciation {
    pub phonetic: Option<String>,
    pub audio_url: Option<String>,
}

/// Enrichment ready for persistence: audio is always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub phonetic: Option<String>,
    pub audio_url: String,
}

// ============================================================================
// Dictionary API records
// ============================================================================

/// One entry of the dictionary API response (only the fields we read)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Option<Vec<PhoneticRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneticRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_parse() {
        assert_eq!(WordId::parse("42"), Some(WordId::new(42)));
        assert_eq!(WordId::parse("-1"), Some(WordId::new(-1)));
        assert_eq!(WordId::parse("abc"), None);
        assert_eq!(WordId::parse(""), None);
        assert_eq!(WordId::parse("1.5"), None);
    }

    #[test]
    fn test_entry_tolerates_nulls_and_extra_fields() {
        let entry: DictionaryEntry = serde_json::from_str(
            r#"{"word":"hello","phonetic":null,"phonetics":null,"meanings":[]}"#,
        )
        .unwrap();
        assert!(entry.phonetic.is_none());
        assert!(entry.phonetics.is_none());

        let record: PhoneticRecord =
            serde_json::from_str(r#"{"text":"/x/","sourceUrl":"https://example"}"#).unwrap();
        assert_eq!(record.text.as_deref(), Some("/x/"));
        assert!(record.audio.is_none());
    }
}
