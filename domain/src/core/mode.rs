//! Translation direction

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Which gender's phrasing is decoded into the other's intended meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TranslationMode {
    /// "Women language" explained to a man
    #[default]
    WomenToMen,
    /// "Men language" explained to a woman
    MenToWomen,
}

impl TranslationMode {
    /// Machine identifier, also accepted by [`FromStr`](std::str::FromStr)
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationMode::WomenToMen => "women-to-men",
            TranslationMode::MenToWomen => "men-to-women",
        }
    }

    /// Human-readable name embedded in prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            TranslationMode::WomenToMen => "Women to Men",
            TranslationMode::MenToWomen => "Men to Women",
        }
    }

    /// The opposite direction
    pub fn swapped(&self) -> Self {
        match self {
            TranslationMode::WomenToMen => TranslationMode::MenToWomen,
            TranslationMode::MenToWomen => TranslationMode::WomenToMen,
        }
    }

    pub fn all() -> [TranslationMode; 2] {
        [TranslationMode::WomenToMen, TranslationMode::MenToWomen]
    }
}

impl std::fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TranslationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "women-to-men" | "w2m" => Ok(TranslationMode::WomenToMen),
            "men-to-women" | "m2w" => Ok(TranslationMode::MenToWomen),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}
