//! Prompt templates for the decoder

use crate::core::{language::DisplayLanguage, mode::TranslationMode};
use serde_json::{Value, json};

/// Templates for the system instruction, the per-call prompt and the
/// structured response schema
pub struct DecoderPromptTemplate;

impl DecoderPromptTemplate {
    /// System instruction describing the decoder persona
    ///
    /// Parameterized only by the display language's name.
    pub fn system_instruction(language: DisplayLanguage) -> String {
        let name = language.display_name();
        format!(
            r#"You are a witty, humorous relationship expert who specializes in "translating" between men and women.
Your goal is to take a phrase typically said by one gender and explain what it *actually* means to the other,
playing on common (lighthearted and funny) relationship tropes.

IMPORTANT: Your entire response (decodedMeaning, relationshipTip, vibe) MUST be in the {name} language.

If mode is Women to Men:
Translate "Women language" into what a man should hear/understand.
Example (English): "I'm fine" -> "I am definitely not fine, but I'm testing if you've noticed why yet."

If mode is Men to Women:
Translate "Men language" into what a woman should hear/understand.
Example (English): "I'll do it in a minute" -> "I have heard your request, but I am currently mentally committed to this sofa for at least another hour."

Always be funny, slightly exaggerated, but relatable. Adapt the humor to the cultural context of the {name} language.
Respond with a single raw JSON object and nothing else."#
        )
    }

    /// Per-call prompt embedding the literal phrase
    pub fn user_prompt(text: &str, mode: TranslationMode, language: DisplayLanguage) -> String {
        format!(
            r#"Translate this phrase: "{}" from {} in the {} language."#,
            text,
            mode.display_name(),
            language.display_name()
        )
    }

    /// Response schema requiring the four string fields of a decoded result
    pub fn response_schema(language: DisplayLanguage) -> Value {
        let name = language.display_name();
        json!({
            "type": "OBJECT",
            "properties": {
                "literalText": {
                    "type": "STRING",
                    "description": "The original phrase provided"
                },
                "decodedMeaning": {
                    "type": "STRING",
                    "description": format!("The humorous decoded hidden meaning in {name}")
                },
                "relationshipTip": {
                    "type": "STRING",
                    "description": format!("A funny piece of advice for the recipient in {name}")
                },
                "vibe": {
                    "type": "STRING",
                    "description": format!("The emotional vibe of the phrase in {name}")
                }
            },
            "required": ["literalText", "decodedMeaning", "relationshipTip", "vibe"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::TranslationResult;

    #[test]
    fn test_system_instruction_names_language() {
        let instruction = DecoderPromptTemplate::system_instruction(DisplayLanguage::Kk);
        assert!(instruction.contains("Kazakh (Қазақша) language"));
        assert!(instruction.contains("witty"));
        assert!(instruction.contains("Women to Men"));
        assert!(instruction.contains("Men to Women"));
    }

    #[test]
    fn test_language_code_is_not_sent() {
        for language in DisplayLanguage::all() {
            let prompt =
                DecoderPromptTemplate::user_prompt("x", TranslationMode::WomenToMen, language);
            assert!(!prompt.contains(&format!(" {} ", language.code())));
            assert!(prompt.contains(language.display_name()));
        }
    }

    #[test]
    fn test_user_prompt_format() {
        let prompt = DecoderPromptTemplate::user_prompt(
            "I'm fine.",
            TranslationMode::WomenToMen,
            DisplayLanguage::En,
        );
        assert_eq!(
            prompt,
            r#"Translate this phrase: "I'm fine." from Women to Men in the English language."#
        );
    }

    #[test]
    fn test_schema_requires_all_result_fields() {
        let schema = DecoderPromptTemplate::response_schema(DisplayLanguage::Ru);
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, TranslationResult::REQUIRED_FIELDS);

        for name in TranslationResult::REQUIRED_FIELDS {
            assert_eq!(schema["properties"][name]["type"], "STRING");
        }
        assert!(
            schema["properties"]["vibe"]["description"]
                .as_str()
                .unwrap()
                .contains("Russian (Русский)")
        );
    }
}
