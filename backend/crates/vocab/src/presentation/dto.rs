//! API DTOs (Data Transfer Objects)
//!
//! The word shape is the one the web client renders: capitalized `ID` and
//! timestamps, snake-case owner, `audioURL`. Absent phonetic or audio is
//! sent as an empty string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Word;

// ============================================================================
// Word
// ============================================================================

/// Word as returned by every `/words` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct WordResponse {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
    pub word: String,
    pub phonetic: String,
    pub definition: String,
    #[serde(rename = "audioURL")]
    pub audio_url: String,
}

impl From<Word> for WordResponse {
    fn from(word: Word) -> Self {
        Self {
            id: word.word_id.value(),
            created_at: word.created_at,
            updated_at: word.updated_at,
            user_id: word.owner_id.to_string(),
            word: word.word,
            phonetic: word.phonetic.unwrap_or_default(),
            definition: word.definition,
            audio_url: word.audio_url.unwrap_or_default(),
        }
    }
}

/// Add word request
#[derive(Debug, Clone, Deserialize)]
pub struct AddWordRequest {
    pub word: String,
    #[serde(default)]
    pub definition: String,
}

/// Update word request
///
/// Missing fields are empty, which clears them. Extra fields the client
/// echoes back (`ID`, `user_id`, timestamps) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateWordRequest {
    pub word: String,
    pub phonetic: String,
    pub definition: String,
    #[serde(rename = "audioURL")]
    pub audio_url: String,
}

/// Plain confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::WordId;
    use kernel::id::AccountId;

    #[test]
    fn test_word_response_shape() {
        let now = Utc::now();
        let word = Word {
            word_id: WordId::new(7),
            owner_id: AccountId::new(),
            word: "hello".into(),
            phonetic: None,
            definition: "greeting".into(),
            audio_url: Some("https://a/hello.mp3".into()),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(WordResponse::from(word)).unwrap();
        assert_eq!(value["ID"], 7);
        assert_eq!(value["word"], "hello");
        assert_eq!(value["phonetic"], "");
        assert_eq!(value["audioURL"], "https://a/hello.mp3");
        assert!(value["user_id"].is_string());
        assert!(value["CreatedAt"].is_string());
        assert!(value["UpdatedAt"].is_string());
    }

    #[test]
    fn test_update_request_accepts_client_echo() {
        let req: UpdateWordRequest = serde_json::from_str(
            r#"{"ID":3,"user_id":"x","word":"hi","phonetic":"/haɪ/","audioURL":"https://a"}"#,
        )
        .unwrap();
        assert_eq!(req.word, "hi");
        assert_eq!(req.phonetic, "/haɪ/");
        assert_eq!(req.definition, "");
        assert_eq!(req.audio_url, "https://a");
    }
}
