//! Display language

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Language for UI labels and for the model's free-text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    En,
    #[default]
    Ru,
    Kk,
}

impl DisplayLanguage {
    /// Short language code (`en`, `ru`, `kk`)
    pub fn code(&self) -> &'static str {
        match self {
            DisplayLanguage::En => "en",
            DisplayLanguage::Ru => "ru",
            DisplayLanguage::Kk => "kk",
        }
    }

    /// Name used inside model instructions. The code itself is never sent.
    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayLanguage::En => "English",
            DisplayLanguage::Ru => "Russian (Русский)",
            DisplayLanguage::Kk => "Kazakh (Қазақша)",
        }
    }

    pub fn all() -> [DisplayLanguage; 3] {
        [DisplayLanguage::Ru, DisplayLanguage::Kk, DisplayLanguage::En]
    }
}

impl std::fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for DisplayLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(DisplayLanguage::En),
            "ru" | "russian" => Ok(DisplayLanguage::Ru),
            "kk" | "kz" | "kazakh" => Ok(DisplayLanguage::Kk),
            _ => Err(DomainError::UnknownLanguage(s.to_string())),
        }
    }
}
