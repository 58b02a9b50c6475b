//! Multilingual text primitives
//!
//! Every display field in the content model is a [`LocalizedText`] holding
//! an English and an Arabic variant, with English as the mandatory
//! fallback. Resolution never yields a missing value: the requested locale
//! wins when non-empty, then English, then the empty string.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::types::{Result, VitrineError};

/// One of the two supported content languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl Locale {
    /// Parse a locale from a query-string value, defaulting to English.
    /// Unknown codes fall back to English rather than failing the read.
    pub fn parse(code: Option<&str>) -> Self {
        match code {
            Some("ar") | Some("AR") => Locale::Ar,
            _ => Locale::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for this locale
    pub fn direction(&self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }
}

/// Per-locale string pair with English as mandatory fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedText {
    /// English-only text with empty Arabic
    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: String::new(),
        }
    }

    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Resolve to a single string for the given locale.
    ///
    /// Returns the locale's value when non-empty, otherwise the English
    /// value, otherwise `""`. Total: never panics, never yields a missing
    /// value.
    pub fn resolve(&self, locale: Locale) -> String {
        let preferred = match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        };
        if !preferred.is_empty() {
            return preferred.clone();
        }
        self.en.clone()
    }

    /// Merge a partial update into this text.
    ///
    /// Locale keys present in `incoming` overwrite; absent keys retain the
    /// existing value. Supports Arabic-only edits and whole replacement
    /// alike.
    pub fn merge_update(&mut self, incoming: &LocalizedPatch) {
        if let Some(ref en) = incoming.en {
            self.en = en.clone();
        }
        if let Some(ref ar) = incoming.ar {
            self.ar = ar.clone();
        }
    }

    /// True when both variants are empty
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ar.is_empty()
    }

    /// True when at least one variant is non-empty
    pub fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

/// Partial localized update: only the keys present are applied
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocalizedPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

impl LocalizedPatch {
    pub fn is_empty(&self) -> bool {
        self.en.is_none() && self.ar.is_none()
    }

    /// Materialize into a full LocalizedText, absent keys becoming `""`
    pub fn into_text(self) -> LocalizedText {
        LocalizedText {
            en: self.en.unwrap_or_default(),
            ar: self.ar.unwrap_or_default(),
        }
    }
}

/// Decode a localized field from a request body value.
///
/// Clients send localized text in three shapes: a flat string (treated as
/// the English value), an `{en, ar}` object with either key possibly
/// missing, or a JSON-encoded string of such an object (legacy form
/// submissions). All three normalize to a [`LocalizedPatch`]; anything
/// else is a validation failure. This decoding stays at the boundary;
/// the content core only ever sees normalized values.
pub fn decode_localized(field: &str, value: &JsonValue) -> Result<LocalizedPatch> {
    match value {
        JsonValue::String(s) => {
            // A string that parses as an {en,ar} object is the legacy
            // JSON-encoded form; any other string is a bare English value.
            if s.trim_start().starts_with('{') {
                if let Ok(inner @ JsonValue::Object(_)) = serde_json::from_str::<JsonValue>(s) {
                    return decode_localized(field, &inner);
                }
            }
            Ok(LocalizedPatch {
                en: Some(s.clone()),
                ar: None,
            })
        }
        JsonValue::Object(map) => {
            let mut patch = LocalizedPatch::default();
            for (key, val) in map {
                let text = match val {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Null => String::new(),
                    other => {
                        return Err(VitrineError::Validation(format!(
                            "Invalid {field}.{key}: expected a string, got {other}"
                        )))
                    }
                };
                match key.as_str() {
                    "en" => patch.en = Some(text),
                    "ar" => patch.ar = Some(text),
                    _ => {
                        return Err(VitrineError::Validation(format!(
                            "Invalid {field}: unknown locale '{key}'"
                        )))
                    }
                }
            }
            Ok(patch)
        }
        JsonValue::Null => Ok(LocalizedPatch::default()),
        other => Err(VitrineError::Validation(format!(
            "Invalid {field}: expected a string or {{en, ar}} object, got {other}"
        ))),
    }
}

/// Decode an optional localized field from a JSON body map.
/// Absent fields yield `None` (no change); present fields are decoded.
pub fn decode_localized_opt(
    body: &JsonValue,
    field: &str,
) -> Result<Option<LocalizedPatch>> {
    match body.get(field) {
        None => Ok(None),
        Some(value) => decode_localized(field, value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_prefers_requested_locale() {
        let t = LocalizedText::new("Tower A", "برج أ");
        assert_eq!(t.resolve(Locale::Ar), "برج أ");
        assert_eq!(t.resolve(Locale::En), "Tower A");
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        let t = LocalizedText::english("Welcome");
        assert_eq!(t.resolve(Locale::Ar), "Welcome");
    }

    #[test]
    fn test_resolve_is_total() {
        let t = LocalizedText::default();
        // Never a missing value, even for fully empty text
        assert_eq!(t.resolve(Locale::En), "");
        assert_eq!(t.resolve(Locale::Ar), "");
    }

    #[test]
    fn test_merge_update_partial() {
        let mut t = LocalizedText::new("Hello", "");
        t.merge_update(&LocalizedPatch {
            en: None,
            ar: Some("مرحبا".to_string()),
        });
        assert_eq!(t.en, "Hello");
        assert_eq!(t.ar, "مرحبا");
    }

    #[test]
    fn test_merge_update_whole_replacement() {
        let mut t = LocalizedText::new("Old", "قديم");
        t.merge_update(&LocalizedPatch {
            en: Some("New".to_string()),
            ar: Some("جديد".to_string()),
        });
        assert_eq!(t, LocalizedText::new("New", "جديد"));
    }

    #[test]
    fn test_decode_flat_string_is_english() {
        let patch = decode_localized("title", &json!("Just a title")).unwrap();
        assert_eq!(patch.en.as_deref(), Some("Just a title"));
        assert!(patch.ar.is_none());
    }

    #[test]
    fn test_decode_partial_object() {
        let patch = decode_localized("title", &json!({"ar": "عنوان"})).unwrap();
        assert!(patch.en.is_none());
        assert_eq!(patch.ar.as_deref(), Some("عنوان"));
        // Materializing fills the missing key with ""
        let text = patch.into_text();
        assert_eq!(text.en, "");
    }

    #[test]
    fn test_decode_json_encoded_string() {
        let patch =
            decode_localized("title", &json!("{\"en\":\"Hi\",\"ar\":\"أهلا\"}")).unwrap();
        assert_eq!(patch.en.as_deref(), Some("Hi"));
        assert_eq!(patch.ar.as_deref(), Some("أهلا"));
    }

    #[test]
    fn test_decode_rejects_unknown_locale() {
        assert!(decode_localized("title", &json!({"fr": "Bonjour"})).is_err());
    }

    #[test]
    fn test_decode_rejects_non_string_values() {
        assert!(decode_localized("title", &json!({"en": 42})).is_err());
        assert!(decode_localized("title", &json!(7)).is_err());
    }

    #[test]
    fn test_locale_parse_defaults_to_english() {
        assert_eq!(Locale::parse(None), Locale::En);
        assert_eq!(Locale::parse(Some("de")), Locale::En);
        assert_eq!(Locale::parse(Some("ar")), Locale::Ar);
    }
}
