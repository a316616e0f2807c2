//! Sample phrases offered for each mode and language

use crate::core::{language::DisplayLanguage, mode::TranslationMode};

/// Four ready-made phrases typical for the given direction and language
pub fn preset_phrases(mode: TranslationMode, language: DisplayLanguage) -> &'static [&'static str] {
    use DisplayLanguage::*;
    use TranslationMode::*;

    match (language, mode) {
        (Ru, WomenToMen) => &[
            "Я не обиделась.",
            "Делай что хочешь.",
            "Я толстая?",
            "Нам нужно поговорить.",
        ],
        (Ru, MenToWomen) => &[
            "Я скоро буду.",
            "Я забыл.",
            "Мне все равно, выбирай сама.",
            "Ничего страшного.",
        ],
        (Kk, WomenToMen) => &[
            "Ренжіген жоқпын.",
            "Өзің біл.",
            "Мен толық көрінбеймін бе?",
            "Сөйлесуіміз керек.",
        ],
        (Kk, MenToWomen) => &[
            "Қазір барамын.",
            "Ұмытып кетіппін.",
            "Өзің таңда.",
            "Ештеңе болған жоқ.",
        ],
        (En, WomenToMen) => &[
            "I'm fine.",
            "Do whatever you want.",
            "Is it hot in here?",
            "We need to talk.",
        ],
        (En, MenToWomen) => &[
            "I'll do it later.",
            "I forgot.",
            "I don't care, you pick.",
            "It's nothing.",
        ],
    }
}
