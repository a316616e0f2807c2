//! Decoded result value object

use serde::{Deserialize, Serialize};

/// The model's decoding of a single phrase (Value Object)
///
/// Field names serialize in camelCase, matching the response schema the
/// model is asked to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// The original phrase, normally echoed back unchanged
    pub literal_text: String,
    /// The humorous hidden meaning
    pub decoded_meaning: String,
    /// Humorous advice for the listener
    pub relationship_tip: String,
    /// Short label for the emotional tone
    pub vibe: String,
}

impl TranslationResult {
    /// JSON names of the fields every response must carry, in schema order
    pub const REQUIRED_FIELDS: [&'static str; 4] =
        ["literalText", "decodedMeaning", "relationshipTip", "vibe"];

    pub fn new(
        literal_text: impl Into<String>,
        decoded_meaning: impl Into<String>,
        relationship_tip: impl Into<String>,
        vibe: impl Into<String>,
    ) -> Self {
        Self {
            literal_text: literal_text.into(),
            decoded_meaning: decoded_meaning.into(),
            relationship_tip: relationship_tip.into(),
            vibe: vibe.into(),
        }
    }

    /// Fields paired with their JSON names, in schema order
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("literalText", &self.literal_text),
            ("decodedMeaning", &self.decoded_meaning),
            ("relationshipTip", &self.relationship_tip),
            ("vibe", &self.vibe),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let result = TranslationResult::new("I'm fine.", "Not fine.", "Bring snacks.", "Storm");
        let value = serde_json::to_value(&result).unwrap();
        for name in TranslationResult::REQUIRED_FIELDS {
            assert!(value.get(name).is_some(), "missing {name}");
        }
        assert_eq!(value["literalText"], "I'm fine.");
    }

    #[test]
    fn test_fields_follow_required_order() {
        let result = TranslationResult::new("a", "b", "c", "d");
        let names: Vec<_> = result.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, TranslationResult::REQUIRED_FIELDS);
    }
}
