//! Structured response parsing.
//!
//! The model is asked for raw JSON but only follows that instruction most of
//! the time, so bodies wrapped in a Markdown code fence are unwrapped first.
//! Everything else is strict: the body must be a JSON object carrying all
//! four fields of [`TranslationResult`] as non-empty strings.

use super::result::TranslationResult;
use serde_json::Value;
use thiserror::Error;

const FENCE: &str = "```";

/// Why a response body could not be turned into a [`TranslationResult`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {0} is not a string")]
    NotAString(&'static str),

    #[error("Field {0} is empty")]
    EmptyField(&'static str),
}

/// Strip a Markdown code fence wrapping the whole body.
///
/// Accepts an optional tag on the opening fence (```` ```json ````). Input
/// without a matching trailing fence is returned trimmed but otherwise as is.
///
/// ```
/// use nededi_domain::translation::parsing::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
    else {
        return trimmed;
    };

    let inner = match inner.find('\n') {
        Some(pos) if is_fence_tag(&inner[..pos]) => &inner[pos + 1..],
        Some(_) => inner,
        // Single-line fence: ```json{...}```
        None => inner
            .strip_prefix("json")
            .or_else(|| inner.strip_prefix("JSON"))
            .unwrap_or(inner),
    };
    inner.trim()
}

fn is_fence_tag(line: &str) -> bool {
    line.trim().chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parse a raw model response into a [`TranslationResult`].
///
/// No field is defaulted, trimmed or otherwise repaired.
pub fn parse_translation_result(raw: &str) -> Result<TranslationResult, ResponseParseError> {
    let body = strip_code_fence(raw);
    let value: Value =
        serde_json::from_str(body).map_err(|e| ResponseParseError::InvalidJson(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(ResponseParseError::NotAnObject);
    };

    let field = |name: &'static str| -> Result<String, ResponseParseError> {
        match map.get(name) {
            None => Err(ResponseParseError::MissingField(name)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(ResponseParseError::EmptyField(name))
            }
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ResponseParseError::NotAString(name)),
        }
    };

    Ok(TranslationResult {
        literal_text: field("literalText")?,
        decoded_meaning: field("decodedMeaning")?,
        relationship_tip: field("relationshipTip")?,
        vibe: field("vibe")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"literalText":"I'm fine.","decodedMeaning":"I am not fine.","relationshipTip":"Ask again, gently.","vibe":"Silent storm"}"#;

    fn expected() -> TranslationResult {
        TranslationResult::new(
            "I'm fine.",
            "I am not fine.",
            "Ask again, gently.",
            "Silent storm",
        )
    }

    #[test]
    fn test_plain_body() {
        assert_eq!(parse_translation_result(BODY).unwrap(), expected());
    }

    #[test]
    fn test_fenced_body_parses_identically() {
        let tagged = format!("```json\n{BODY}\n```");
        let untagged = format!("```\n{BODY}\n```");
        let padded = format!("\n  ```json\n{BODY}\n```  \n");
        let single_line = format!("```json{BODY}```");
        for raw in [tagged, untagged, padded, single_line] {
            assert_eq!(parse_translation_result(&raw).unwrap(), expected(), "{raw}");
        }
    }

    #[test]
    fn test_unterminated_fence_is_left_alone() {
        let raw = format!("```json\n{BODY}");
        assert_eq!(strip_code_fence(&raw), raw.as_str());
        assert!(matches!(
            parse_translation_result(&raw),
            Err(ResponseParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        for name in TranslationResult::REQUIRED_FIELDS {
            let mut value: Value = serde_json::from_str(BODY).unwrap();
            value.as_object_mut().unwrap().remove(name);
            let raw = value.to_string();
            assert_eq!(
                parse_translation_result(&raw),
                Err(ResponseParseError::MissingField(name))
            );
        }
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let raw = r#"{"literalText":"hi","decodedMeaning":42,"relationshipTip":"x","vibe":"y"}"#;
        assert_eq!(
            parse_translation_result(raw),
            Err(ResponseParseError::NotAString("decodedMeaning"))
        );
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let raw = r#"{"literalText":"hi","decodedMeaning":"x","relationshipTip":"x","vibe":"  "}"#;
        assert_eq!(
            parse_translation_result(raw),
            Err(ResponseParseError::EmptyField("vibe"))
        );
    }

    #[test]
    fn test_array_is_not_an_object() {
        let raw = r#"["I'm fine.","a","b","c"]"#;
        assert_eq!(
            parse_translation_result(raw),
            Err(ResponseParseError::NotAnObject)
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = r#"{"literalText":"a","decodedMeaning":"b","relationshipTip":"c","vibe":"d","emoji":"!"}"#;
        assert_eq!(
            parse_translation_result(raw).unwrap(),
            TranslationResult::new("a", "b", "c", "d")
        );
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let raw = r#"{"literalText":" a ","decodedMeaning":"b\n","relationshipTip":"c","vibe":"d"}"#;
        let result = parse_translation_result(raw).unwrap();
        assert_eq!(result.literal_text, " a ");
        assert_eq!(result.decoded_meaning, "b\n");
    }
}
