//! REPL (Read-Eval-Print Loop) for interactive decoding

use crate::output::console::ConsoleFormatter;
use crate::output::labels::UiText;
use crate::progress::reporter::WaitingIndicator;
use colored::Colorize;
use nededi_application::{DecoderSession, NoProgress};
use nededi_domain::{
    DisplayLanguage, HISTORY_CAPACITY, HistoryId, HistoryItem, OutputFormat, TranslationMode, preset_phrases,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    /// Set the mode, or toggle it when no argument is given
    Mode(Option<TranslationMode>),
    Swap,
    Lang(DisplayLanguage),
    Presets,
    /// 1-based index into the current preset list
    Preset(usize),
    History,
    /// 1-based position, full id, or id prefix
    Show(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match (name, arg) {
            ("/quit" | "/exit" | "/q", _) => Ok(Self::Quit),
            ("/help" | "/h" | "/?", _) => Ok(Self::Help),
            ("/mode", None) => Ok(Self::Mode(None)),
            ("/mode", Some(arg)) => arg
                .parse()
                .map(|mode| Self::Mode(Some(mode)))
                .map_err(|e| format!("{}", e)),
            ("/swap", _) => Ok(Self::Swap),
            ("/lang", Some(arg)) => arg.parse().map(Self::Lang).map_err(|e| format!("{}", e)),
            ("/lang", None) => Err("Usage: /lang <en|ru|kk>".to_string()),
            ("/presets", _) => Ok(Self::Presets),
            ("/preset", Some(arg)) => match arg.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Self::Preset(n)),
                _ => Err(format!("Invalid preset number: {}", arg)),
            },
            ("/preset", None) => Err("Usage: /preset <n>".to_string()),
            ("/history", _) => Ok(Self::History),
            ("/show", Some(arg)) => Ok(Self::Show(arg.to_string())),
            ("/show", None) => Err("Usage: /show <n|id>".to_string()),
            _ => Err(format!("Unknown command: {}", name)),
        }
    }
}

/// Interactive decoder REPL
pub struct DecoderRepl {
    session: DecoderSession,
    mode: TranslationMode,
    language: DisplayLanguage,
    format: OutputFormat,
    show_progress: bool,
    verbose: bool,
}

impl DecoderRepl {
    pub fn new(session: DecoderSession, mode: TranslationMode, language: DisplayLanguage) -> Self {
        Self {
            session,
            mode,
            language,
            format: OutputFormat::Full,
            show_progress: true,
            verbose: false,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Show error details next to the localized notice
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    pub fn language(&self) -> DisplayLanguage {
        self.language
    }

    pub fn session(&self) -> &DecoderSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        self.print_welcome();

        loop {
            let prompt = self.prompt();
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_line(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_phrase(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    fn prompt(&self) -> DefaultPrompt {
        let text = UiText::for_language(self.language);
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(format!(
                "{} [{}]",
                text.direction(self.mode),
                self.language.code()
            )),
            DefaultPromptSegment::Empty,
        )
    }

    fn print_welcome(&self) {
        let text = UiText::for_language(self.language);
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│{:^45}│", text.title);
        println!("╰─────────────────────────────────────────────╯");
        println!("{}", text.subtitle.dimmed());
        println!();
        println!("{}", text.input_hint(self.mode).italic());
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /mode [MODE]     - Toggle or set women-to-men / men-to-women");
        println!("  /swap            - Swap the decoding direction");
        println!("  /lang <en|ru|kk> - Change the display language");
        println!("  /presets         - List preset phrases");
        println!("  /preset <n>      - Decode preset phrase n");
        println!("  /history         - Show recent decodings");
        println!("  /show <n|id>     - Re-open a history entry");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle a slash command line. Returns true if the REPL should exit.
    pub async fn handle_line(&mut self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            Ok(command) => self.handle_command(command).await,
            Err(message) => {
                println!("{}", message);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Mode(None) | ReplCommand::Swap => {
                self.mode = self.mode.swapped();
                self.print_direction();
            }
            ReplCommand::Mode(Some(mode)) => {
                self.mode = mode;
                self.print_direction();
            }
            ReplCommand::Lang(language) => {
                self.language = language;
                println!("{} {}", "Language:".cyan().bold(), language.display_name());
            }
            ReplCommand::Presets => {
                print!("{}", ConsoleFormatter::format_presets(self.mode, self.language));
            }
            ReplCommand::Preset(n) => {
                let presets = preset_phrases(self.mode, self.language);
                match n.checked_sub(1).and_then(|i| presets.get(i)) {
                    Some(phrase) => {
                        println!("{} {}", ">".dimmed(), phrase);
                        self.process_phrase(phrase).await;
                    }
                    None => println!("No preset #{} (1-{})", n, presets.len()),
                }
            }
            ReplCommand::History => {
                let items = self.session.history().list();
                print!("{}", ConsoleFormatter::format_history(&items, self.language));
            }
            ReplCommand::Show(key) => match self.lookup(&key) {
                Some(item) => println!("{}", ConsoleFormatter::render(&item, self.format)),
                None => println!("No history entry matches '{}'", key),
            },
        }
        false
    }

    fn print_direction(&self) {
        let text = UiText::for_language(self.language);
        println!("{} {}", "Mode:".cyan().bold(), text.direction(self.mode));
    }

    /// Resolve `/show` arguments without any network access.
    fn lookup(&self, key: &str) -> Option<HistoryItem> {
        let history = self.session.history();
        if let Ok(position) = key.parse::<usize>()
            && position <= HISTORY_CAPACITY
        {
            return history.select_position(position);
        }
        if let Ok(id) = key.parse::<HistoryId>() {
            return history.select_item(&id);
        }
        history.select_prefix(key)
    }

    async fn process_phrase(&self, phrase: &str) {
        println!();

        let outcome = if self.show_progress {
            let progress = WaitingIndicator::new();
            self.session
                .submit_with_progress(phrase, self.mode, self.language, &progress)
                .await
        } else {
            self.session
                .submit_with_progress(phrase, self.mode, self.language, &NoProgress)
                .await
        };

        match outcome {
            Ok(item) => println!("{}", ConsoleFormatter::render(&item, self.format)),
            Err(e) => eprintln!(
                "{}",
                ConsoleFormatter::format_session_error(self.language, &e, self.verbose)
            ),
        }
        println!();
    }
}
