//! Localized interface text

use nededi_domain::{DisplayLanguage, TranslationMode};

/// Fixed interface strings for one display language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub she: &'static str,
    pub he: &'static str,
    pub recent: &'static str,
    pub error: &'static str,
    pub what_said: &'static str,
    pub real_meaning: &'static str,
    pub expert_tip: &'static str,
    pub vibe: &'static str,
    pub items_label: &'static str,
    pub prompt_her: &'static str,
    pub prompt_him: &'static str,
}

const RU: UiText = UiText {
    title: "Ne Dedi?!",
    subtitle: "Умный переводчик с женского на мужской и наоборот",
    she: "Она",
    he: "Он",
    recent: "Последние озарения",
    error: "Ошибка связи с оракулом.",
    what_said: "Исходная фраза",
    real_meaning: "Скрытый смысл",
    expert_tip: "Совет эксперта",
    vibe: "Настроение",
    items_label: "ЗАПИСЕЙ",
    prompt_her: "Что она сказала...",
    prompt_him: "Что он сказал...",
};

const KK: UiText = UiText {
    title: "Ne Dedi?!",
    subtitle: "Ерлер мен әйелдер тілін түсінуге көмектесетін дешифратор",
    she: "Ол (Әйел)",
    he: "Ол (Ер)",
    recent: "Тарих",
    error: "Байланыс үзілді.",
    what_said: "Айтылған сөз",
    real_meaning: "Шындығында",
    expert_tip: "Маман кеңесі",
    vibe: "Көңіл-күй",
    items_label: "ЖАЗБА",
    prompt_her: "Ол не деді...",
    prompt_him: "Ол не деді...",
};

const EN: UiText = UiText {
    title: "Ne Dedi?!",
    subtitle: "The ultimate gender meaning decoder",
    she: "She",
    he: "He",
    recent: "Recent Insights",
    error: "Oracle is currently resting.",
    what_said: "Original Phrase",
    real_meaning: "Hidden Meaning",
    expert_tip: "Pro Tip",
    vibe: "Vibe",
    items_label: "ITEMS",
    prompt_her: "What she said...",
    prompt_him: "What he said...",
};

impl UiText {
    pub fn for_language(language: DisplayLanguage) -> &'static UiText {
        match language {
            DisplayLanguage::En => &EN,
            DisplayLanguage::Ru => &RU,
            DisplayLanguage::Kk => &KK,
        }
    }

    /// Direction label such as "She → He"
    pub fn direction(&self, mode: TranslationMode) -> String {
        match mode {
            TranslationMode::WomenToMen => format!("{} → {}", self.she, self.he),
            TranslationMode::MenToWomen => format!("{} → {}", self.he, self.she),
        }
    }

    /// Input hint for the speaker of the current mode
    pub fn input_hint(&self, mode: TranslationMode) -> &'static str {
        match mode {
            TranslationMode::WomenToMen => self.prompt_her,
            TranslationMode::MenToWomen => self.prompt_him,
        }
    }
}
