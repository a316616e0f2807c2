//! CLI command definitions

use clap::Parser;
use nededi_domain::{DisplayLanguage, OutputFormat, TranslationMode};
use std::path::PathBuf;

/// CLI arguments for ne-dedi
#[derive(Parser, Debug)]
#[command(name = "ne-dedi")]
#[command(author, version, about = "Ne Dedi?! - decode what she (or he) really meant")]
#[command(long_about = r#"
Ne Dedi?! sends a phrase to Gemini and explains its hidden meaning,
with a relationship tip and a one-word vibe.

The API key is read from GEMINI_API_KEY unless [gemini] api_key or
api_key_env says otherwise.

Configuration files are loaded from (in priority order):
1. --config <path>             Explicit config file
2. ./ne-dedi.toml              Project-level config
3. ~/.config/ne-dedi/config.toml   Global config
Environment variables prefixed with NEDEDI_ override all files
(e.g. NEDEDI_GEMINI__MODEL).

Example:
  ne-dedi "I'm fine."
  ne-dedi -m men-to-women -l en "I'll be there in 5 minutes."
  ne-dedi --chat -l kk
"#)]
pub struct Cli {
    /// The phrase to decode (not required in chat mode)
    pub phrase: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Decoding direction: women-to-men or men-to-women
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<TranslationMode>,

    /// Display language: en, ru or kk
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<DisplayLanguage>,

    /// Output format: full, brief or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of requests and responses to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
