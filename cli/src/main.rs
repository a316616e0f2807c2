//! CLI entrypoint for Ne Dedi
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use nededi_application::{
    ConversationLogger, DecodeProgressNotifier, DecoderSession, NoProgress, TranslatePhraseUseCase,
};
use nededi_domain::OutputFormat;
use nededi_infrastructure::{ConfigLoader, ConfigValidationError, GeminiGateway, JsonlConversationLogger};
use nededi_presentation::{Cli, ConsoleFormatter, DecoderRepl, SimpleProgress, WaitingIndicator};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let warnings = ConfigValidationError::check(config.validate())?;
    for warning in &warnings {
        eprintln!("{}", warning);
    }

    info!("Starting Ne Dedi with model {}", config.gemini.model);

    if !config.output.color {
        colored::control::set_override(false);
    }

    // CLI flags win over config defaults
    let (default_mode, _) = config.translator.parse_mode();
    let (default_language, _) = config.translator.parse_language();
    let mode = cli.mode.unwrap_or(default_mode);
    let language = cli.lang.unwrap_or(default_language);
    let format = cli
        .output
        .or(config.output.format)
        .unwrap_or(OutputFormat::Full);

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::from_config(&config.gemini)?);
    let mut use_case = TranslatePhraseUseCase::new(gateway, config.translator_params());

    let log_path = cli.log_file.as_ref().or(config.logging.conversation_log.as_ref());
    if let Some(logger) = log_path.and_then(JsonlConversationLogger::new) {
        info!("Writing conversation log to {}", logger.path().display());
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        use_case = use_case.with_conversation_logger(logger);
    }

    let session = DecoderSession::new(use_case);

    // Chat mode
    if cli.chat {
        let mut repl = DecoderRepl::new(session, mode, language)
            .with_progress(!cli.quiet)
            .with_format(format)
            .with_verbose(cli.verbose > 0);

        repl.run().await?;
        return Ok(());
    }

    // Single phrase mode - phrase is required
    let phrase = match cli.phrase {
        Some(p) => p,
        None => bail!("Phrase is required. Use --chat for interactive mode."),
    };

    let progress: Box<dyn DecodeProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(WaitingIndicator::new())
    } else {
        Box::new(SimpleProgress)
    };

    match session
        .submit_with_progress(&phrase, mode, language, progress.as_ref())
        .await
    {
        Ok(item) => {
            println!("{}", ConsoleFormatter::render(&item, format));
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{}",
                ConsoleFormatter::format_session_error(language, &e, cli.verbose > 0)
            );
            // The notice above is the user-facing report
            std::process::exit(1);
        }
    }
}
