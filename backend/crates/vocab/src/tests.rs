//! Service and router tests for the vocab crate

#[cfg(test)]
mod support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use kernel::id::AccountId;

    use crate::domain::entities::{NewWord, Word, WordChanges};
    use crate::domain::repository::{Enricher, WordRepository};
    use crate::domain::value_objects::{Pronunciation, WordId};
    use crate::error::VocabResult;

    /// In-memory word store with sequential ids
    #[derive(Clone, Default)]
    pub struct MemoryWords {
        words: Arc<Mutex<Vec<Word>>>,
    }

    impl MemoryWords {
        pub fn snapshot(&self) -> Vec<Word> {
            self.words.lock().unwrap().clone()
        }
    }

    impl WordRepository for MemoryWords {
        async fn list_by_owner(&self, owner_id: AccountId) -> VocabResult<Vec<Word>> {
            Ok(self
                .words
                .lock()
                .unwrap()
                .iter()
                .filter(|w| w.owner_id == owner_id)
                .cloned()
                .collect())
        }

        async fn create(&self, new_word: &NewWord) -> VocabResult<Word> {
            let mut words = self.words.lock().unwrap();
            let next_id = words.iter().map(|w| w.word_id.value()).max().unwrap_or(0) + 1;
            let now = Utc::now();
            let word = Word {
                word_id: WordId::new(next_id),
                owner_id: new_word.owner_id,
                word: new_word.word.clone(),
                phonetic: new_word.phonetic.clone(),
                definition: new_word.definition.clone(),
                audio_url: new_word.audio_url.clone(),
                created_at: now,
                updated_at: now,
            };
            words.push(word.clone());
            Ok(word)
        }

        async fn update(
            &self,
            owner_id: AccountId,
            word_id: WordId,
            changes: &WordChanges,
        ) -> VocabResult<Option<Word>> {
            let mut words = self.words.lock().unwrap();
            let Some(word) = words
                .iter_mut()
                .find(|w| w.word_id == word_id && w.owner_id == owner_id)
            else {
                return Ok(None);
            };
            word.word = changes.word.clone();
            word.phonetic = changes.phonetic.clone();
            word.definition = changes.definition.clone();
            word.audio_url = changes.audio_url.clone();
            word.updated_at = Utc::now();
            Ok(Some(word.clone()))
        }

        async fn delete(&self, owner_id: AccountId, word_id: WordId) -> VocabResult<bool> {
            let mut words = self.words.lock().unwrap();
            let before = words.len();
            words.retain(|w| !(w.word_id == word_id && w.owner_id == owner_id));
            Ok(words.len() != before)
        }
    }

    /// Enricher returning a fixed answer and counting calls
    #[derive(Clone, Default)]
    pub struct StubEnricher {
        answer: Pronunciation,
        calls: Arc<AtomicUsize>,
    }

    impl StubEnricher {
        pub fn answering(phonetic: Option<&str>, audio_url: Option<&str>) -> Self {
            Self {
                answer: Pronunciation {
                    phonetic: phonetic.map(str::to_string),
                    audio_url: audio_url.map(str::to_string),
                },
                calls: Arc::default(),
            }
        }

        /// Behaves like a dictionary that could not be reached
        pub fn failing() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Enricher for StubEnricher {
        async fn lookup(&self, _word: &str) -> Pronunciation {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }
}

#[cfg(test)]
mod service_tests {
    use std::sync::Arc;

    use kernel::id::AccountId;

    use super::support::{MemoryWords, StubEnricher};
    use crate::application::{AddWordInput, UpdateWordInput, VocabConfig, WordService};
    use crate::error::VocabError;

    const HELLO_TTS: &str = "https://dict.youdao.com/dictvoice?audio=hello&type=2";

    fn service(
        repo: &MemoryWords,
        enricher: &StubEnricher,
    ) -> WordService<MemoryWords, StubEnricher> {
        WordService::new(
            Arc::new(repo.clone()),
            Arc::new(enricher.clone()),
            Arc::new(VocabConfig::default()),
        )
    }

    fn add_input(word: &str, definition: &str) -> AddWordInput {
        AddWordInput {
            word: word.to_string(),
            definition: definition.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_falls_back_to_tts_audio() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::answering(Some("/hɛˈloʊ/"), None);
        let owner = AccountId::new();

        let word = service(&repo, &enricher)
            .add(owner, add_input("hello", "a greeting"))
            .await
            .unwrap();

        assert_eq!(word.owner_id, owner);
        assert_eq!(word.word, "hello");
        assert_eq!(word.definition, "a greeting");
        assert_eq!(word.phonetic.as_deref(), Some("/hɛˈloʊ/"));
        assert_eq!(word.audio_url.as_deref(), Some(HELLO_TTS));
        assert_eq!(enricher.calls(), 1);
    }

    #[tokio::test]
    async fn test_add_survives_failed_lookup() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::failing();

        let word = service(&repo, &enricher)
            .add(AccountId::new(), add_input("hello", ""))
            .await
            .unwrap();

        assert!(word.phonetic.is_none());
        assert_eq!(word.audio_url.as_deref(), Some(HELLO_TTS));
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_add_upgrades_insecure_audio() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::answering(None, Some("http://media.example/hello.mp3"));

        let word = service(&repo, &enricher)
            .add(AccountId::new(), add_input("hello", ""))
            .await
            .unwrap();

        assert_eq!(
            word.audio_url.as_deref(),
            Some("https://media.example/hello.mp3")
        );
    }

    #[tokio::test]
    async fn test_add_stores_text_as_sent() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::answering(Some("/ˌaɪs ˈkriːm/"), None);

        let word = service(&repo, &enricher)
            .add(AccountId::new(), add_input("  ice cream ", ""))
            .await
            .unwrap();

        assert_eq!(word.word, "  ice cream ");
        assert_eq!(
            word.audio_url.as_deref(),
            Some("https://dict.youdao.com/dictvoice?audio=ice%20cream&type=2")
        );
        assert_eq!(enricher.calls(), 1);
    }

    #[tokio::test]
    async fn test_add_blank_word_skips_lookup() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::answering(Some("/x/"), Some("https://x"));

        let word = service(&repo, &enricher)
            .add(AccountId::new(), add_input("", "nothing"))
            .await
            .unwrap();

        assert_eq!(word.word, "");
        assert_eq!(word.phonetic, None);
        assert_eq!(enricher.calls(), 0);
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_update_of_foreign_word_is_not_found() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::answering(Some("/b/"), Some("https://b"));
        let (owner_a, owner_b) = (AccountId::new(), AccountId::new());
        let service = service(&repo, &enricher);

        let b_word = service.add(owner_b, add_input("bee", "insect")).await.unwrap();

        let err = service
            .update(
                owner_a,
                b_word.word_id,
                UpdateWordInput {
                    word: "hijacked".into(),
                    phonetic: String::new(),
                    definition: String::new(),
                    audio_url: String::new(),
                },
            )
            .await
            .err()
            .unwrap();
        assert!(matches!(err, VocabError::NotFound));

        assert_eq!(repo.snapshot(), vec![b_word.clone()]);
        assert!(matches!(
            service.delete(owner_a, b_word.word_id).await,
            Err(VocabError::NotFound)
        ));
        assert_eq!(service.list(owner_a).await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_without_lookup() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::answering(Some("/w/"), Some("https://w"));
        let owner = AccountId::new();
        let service = service(&repo, &enricher);

        let word = service.add(owner, add_input("word", "old")).await.unwrap();

        let updated = service
            .update(
                owner,
                word.word_id,
                UpdateWordInput {
                    word: "world".into(),
                    phonetic: String::new(),
                    definition: "new".into(),
                    audio_url: "http://kept.verbatim/a.mp3".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.word_id, word.word_id);
        assert_eq!(updated.word, "world");
        assert_eq!(updated.phonetic, None);
        assert_eq!(updated.definition, "new");
        assert_eq!(updated.audio_url.as_deref(), Some("http://kept.verbatim/a.mp3"));
        assert_eq!(enricher.calls(), 1);
    }

    #[tokio::test]
    async fn test_list_add_delete_roundtrip() {
        let repo = MemoryWords::default();
        let enricher = StubEnricher::failing();
        let owner = AccountId::new();
        let service = service(&repo, &enricher);

        let first = service.add(owner, add_input("one", "")).await.unwrap();
        let second = service.add(owner, add_input("two", "")).await.unwrap();
        service.add(AccountId::new(), add_input("other", "")).await.unwrap();

        let ids: Vec<_> = service
            .list(owner)
            .await
            .unwrap()
            .iter()
            .map(|w| w.word_id)
            .collect();
        assert_eq!(ids, vec![first.word_id, second.word_id]);

        service.delete(owner, first.word_id).await.unwrap();

        let remaining = service.list(owner).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|w| w.word_id != first.word_id));

        assert!(matches!(
            service.delete(owner, first.word_id).await,
            Err(VocabError::NotFound)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::extract::Extension;
    use axum::http::{Request, StatusCode, header};
    use kernel::id::AccountId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::{MemoryWords, StubEnricher};
    use crate::application::VocabConfig;
    use crate::presentation::vocab_router_generic;

    fn app(repo: &MemoryWords, owner: AccountId) -> Router {
        vocab_router_generic(
            repo.clone(),
            StubEnricher::answering(Some("/hɛˈloʊ/"), None),
            Arc::new(VocabConfig::default()),
        )
        .layer(Extension(owner))
    }

    fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let repo = MemoryWords::default();
        let owner = AccountId::new();

        let response = app(&repo, owner)
            .oneshot(request(
                "POST",
                "/words",
                Some(r#"{"word":"hello","definition":"a greeting"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = body_json(response).await;
        assert_eq!(created["ID"], 1);
        assert_eq!(created["user_id"], owner.to_string());
        assert_eq!(created["word"], "hello");
        assert_eq!(created["phonetic"], "/hɛˈloʊ/");
        assert_eq!(created["definition"], "a greeting");
        assert_eq!(
            created["audioURL"],
            "https://dict.youdao.com/dictvoice?audio=hello&type=2"
        );

        let response = app(&repo, owner)
            .oneshot(request("GET", "/words", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed, json!([created]));
    }

    #[tokio::test]
    async fn test_list_empty_is_array() {
        let response = app(&MemoryWords::default(), AccountId::new())
            .oneshot(request("GET", "/words", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = MemoryWords::default();
        let owner = AccountId::new();

        app(&repo, owner)
            .oneshot(request("POST", "/words", Some(r#"{"word":"hello"}"#)))
            .await
            .unwrap();

        let response = app(&repo, owner)
            .oneshot(request(
                "PUT",
                "/words/1",
                Some(r#"{"ID":1,"word":"hullo","phonetic":"","definition":"variant","audioURL":""}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["word"], "hullo");
        assert_eq!(updated["phonetic"], "");
        assert_eq!(updated["audioURL"], "");

        let response = app(&repo, owner)
            .oneshot(request("DELETE", "/words/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Word deleted successfully" })
        );
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_and_foreign_ids_are_not_found() {
        let repo = MemoryWords::default();
        let owner = AccountId::new();

        app(&repo, owner)
            .oneshot(request("POST", "/words", Some(r#"{"word":"hello"}"#)))
            .await
            .unwrap();

        let stranger = AccountId::new();
        let cases = [
            ("PUT", "/words/1", Some(r#"{"word":"x"}"#), stranger),
            ("DELETE", "/words/1", None, stranger),
            ("DELETE", "/words/99", None, owner),
            ("DELETE", "/words/abc", None, owner),
            ("PUT", "/words/abc", Some(r#"{"word":"x"}"#), owner),
        ];

        for (method, uri, body, caller) in cases {
            let response = app(&repo, caller)
                .oneshot(request(method, uri, body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
            assert_eq!(body_json(response).await, json!({ "error": "Word not found" }));
        }

        assert_eq!(repo.snapshot()[0].word, "hello");
    }

    #[tokio::test]
    async fn test_bad_bodies_are_invalid_input() {
        let repo = MemoryWords::default();
        let owner = AccountId::new();

        for body in ["{not json", r#"{"definition":"no word"}"#, r#"{"word":7}"#] {
            let response = app(&repo, owner)
                .oneshot(request("POST", "/words", Some(body)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(body_json(response).await, json!({ "error": "Invalid input" }));
        }
    }
}
