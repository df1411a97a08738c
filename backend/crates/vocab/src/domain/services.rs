//! Domain Services
//!
//! Pure enrichment logic: reading a dictionary response, the TTS fallback
//! and the https rule for audio links.

use crate::domain::value_objects::{DictionaryEntry, Enrichment, Pronunciation};

/// Placeholder replaced by the escaped word in a TTS template
pub const TTS_WORD_PLACEHOLDER: &str = "{word}";

/// Pick phonetic text and audio from the first dictionary entry.
///
/// Records are scanned in order; the first non-empty audio and the first
/// non-empty text win independently, so one record never fills in for
/// another's missing half. The entry's top-level `phonetic` is used only
/// when no record has text.
pub fn extract_pronunciation(entries: &[DictionaryEntry]) -> Pronunciation {
    let Some(entry) = entries.first() else {
        return Pronunciation::default();
    };

    let mut phonetic = None;
    let mut audio_url = None;

    for record in entry.phonetics.iter().flatten() {
        if audio_url.is_none() {
            audio_url = non_empty(record.audio.as_deref());
        }
        if phonetic.is_none() {
            phonetic = non_empty(record.text.as_deref());
        }
        if audio_url.is_some() && phonetic.is_some() {
            break;
        }
    }

    if phonetic.is_none() {
        phonetic = non_empty(entry.phonetic.as_deref());
    }

    Pronunciation {
        phonetic,
        audio_url,
    }
}

/// Synthesized pronunciation link for a word
pub fn tts_url(template: &str, word: &str) -> String {
    template.replace(TTS_WORD_PLACEHOLDER, &urlencoding::encode(word))
}

/// Force an audio link onto https.
///
/// Empty and `https://` links pass through. `http://` is swapped, a
/// protocol-relative `//host` gets the scheme, anything else is prefixed.
pub fn normalize_audio_url(url: &str) -> String {
    if url.is_empty() || url.starts_with("https://") {
        return url.to_string();
    }
    if let Some(rest) = url.strip_prefix("//") {
        return format!("https://{rest}");
    }
    let rest = url.strip_prefix("http://").unwrap_or(url);
    format!("https://{rest}")
}

/// Turn a lookup result into what gets stored: fall back to TTS audio when
/// none was found, then normalize.
pub fn complete_enrichment(found: Pronunciation, word: &str, tts_template: &str) -> Enrichment {
    let audio_url = found
        .audio_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| tts_url(tts_template, word));

    Enrichment {
        phonetic: found.phonetic.filter(|p| !p.is_empty()),
        audio_url: normalize_audio_url(&audio_url),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
