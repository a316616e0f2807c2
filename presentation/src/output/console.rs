//! Console output formatter for decoded phrases

use crate::output::labels::UiText;
use colored::Colorize;
use nededi_application::{SessionError, TranslationError};
use nededi_domain::util::preview;
use nededi_domain::{DisplayLanguage, HistoryItem, OutputFormat, TranslationMode, preset_phrases};

/// Formats decoded phrases and history for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a decoded phrase in the requested output format
    pub fn render(item: &HistoryItem, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(item),
            OutputFormat::Brief => Self::format_brief(item),
            OutputFormat::Json => Self::format_json(item),
        }
    }

    /// Format a decoded phrase as a full card
    pub fn format(item: &HistoryItem) -> String {
        let text = UiText::for_language(item.language);
        let result = &item.result;
        let mut output = String::new();

        output.push_str(&Self::header(text.title));
        output.push('\n');

        output.push_str(&format!(
            "{}  {} {}\n",
            text.direction(item.mode).magenta().bold(),
            format!("{}:", text.vibe).dimmed(),
            format!("#{}", result.vibe).yellow()
        ));

        output.push_str(&Self::section_header(text.what_said));
        output.push_str(&format!("\n{}\n", Self::indent(&format!("\"{}\"", result.literal_text), "  ").italic()));

        output.push_str(&Self::section_header(text.real_meaning));
        output.push_str(&format!("\n{}\n", Self::indent(&result.decoded_meaning, "  ")));

        output.push_str(&Self::section_header(text.expert_tip));
        output.push_str(&format!("\n{}\n", Self::indent(&result.relationship_tip, "  ")));

        output.push_str(&Self::footer());

        output
    }

    /// Format only the decoded meaning and vibe
    pub fn format_brief(item: &HistoryItem) -> String {
        let text = UiText::for_language(item.language);
        format!(
            "{} {}\n{}\n",
            format!("{}:", text.real_meaning).cyan().bold(),
            item.result.decoded_meaning,
            format!("#{}", item.result.vibe).yellow()
        )
    }

    /// Format as JSON
    pub fn format_json(item: &HistoryItem) -> String {
        serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the session history, newest first, numbered from 1
    pub fn format_history(items: &[HistoryItem], language: DisplayLanguage) -> String {
        let text = UiText::for_language(language);
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            text.recent.cyan().bold(),
            format!("({} {})", items.len(), text.items_label).dimmed()
        ));
        output.push_str(&format!("{}\n", "-".repeat(40)));

        for (index, item) in items.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {} {} {}\n",
                index + 1,
                item.id.short().dimmed(),
                item.timestamp.format("%H:%M").to_string().dimmed(),
                format!("#{}", item.result.vibe).yellow()
            ));
            output.push_str(&format!("     \"{}\"\n", preview(&item.result.literal_text, 50)));
            output.push_str(&format!("     {}\n", preview(&item.result.decoded_meaning, 70).dimmed()));
        }

        output
    }

    /// Format the preset phrases for a mode and language, numbered from 1
    pub fn format_presets(mode: TranslationMode, language: DisplayLanguage) -> String {
        let text = UiText::for_language(language);
        let mut output = format!("\n{}\n", text.direction(mode).magenta().bold());
        for (index, phrase) in preset_phrases(mode, language).iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", index + 1, phrase));
        }
        output
    }

    /// Localized error notice, with the technical detail when `verbose`
    pub fn format_error(language: DisplayLanguage, detail: &str, verbose: bool) -> String {
        let notice = UiText::for_language(language).error;
        if verbose {
            format!("{} {}", notice.red().bold(), format!("({})", detail).dimmed())
        } else {
            notice.red().bold().to_string()
        }
    }

    /// Report a failed submission.
    ///
    /// Input problems are shown as they are; everything past validation
    /// gets the localized notice.
    pub fn format_session_error(language: DisplayLanguage, error: &SessionError, verbose: bool) -> String {
        match error {
            SessionError::Translation(TranslationError::Validation(e)) => e.to_string().yellow().to_string(),
            SessionError::Busy => error.to_string().yellow().to_string(),
            SessionError::Translation(e) => Self::format_error(language, &e.to_string(), verbose),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.magenta(), title.bold(), line.magenta())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).magenta())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
