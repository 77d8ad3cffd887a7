//! Command-line entry point.
//!
//! # Startup sequence
//!
//! 1. Initialise logging (`RUST_LOG`, default `warn` so stdout stays clean).
//! 2. Parse arguments.
//! 3. Load [`AppConfig`] from `--config` or the platform path (defaults on
//!    first run).
//! 4. Dispatch the subcommand.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use text_translator::{
    config::{AppConfig, AppPaths},
    translate::{language, Resolver, SUPPORTED_LANGUAGES},
};

#[derive(Debug, Parser)]
#[command(name = "text-translator", version, about = "Translate short text between languages")]
struct Cli {
    /// Settings file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate TEXT and print the result.
    Translate {
        /// Source language code (e.g. `en`, `hi-IN`, `auto`).
        #[arg(short, long)]
        from: Option<String>,
        /// Target language code.
        #[arg(short, long)]
        to: Option<String>,
        /// Text to translate; multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List supported language codes.
    Languages,
    /// Write a default settings file if none exists and print its path.
    InitConfig,
}

fn warn_if_unknown(code: &str) {
    if !language::is_supported(code) {
        log::warn!("language code `{code}` is not in the supported list; trying anyway");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings_path = cli
        .config
        .clone()
        .unwrap_or_else(|| AppPaths::new().settings_file);

    match cli.command {
        Command::Languages => {
            for lang in SUPPORTED_LANGUAGES {
                println!("{:<4} {}", lang.code, lang.name);
            }
        }

        Command::InitConfig => {
            if settings_path.exists() {
                log::info!("settings file already present");
            } else {
                AppConfig::default()
                    .save_to(&settings_path)
                    .with_context(|| format!("writing {}", settings_path.display()))?;
            }
            println!("{}", settings_path.display());
        }

        Command::Translate { from, to, text } => {
            let config = AppConfig::load_from(&settings_path)
                .with_context(|| format!("reading {}", settings_path.display()))?;
            log::info!("loaded settings from {}", settings_path.display());

            let from = from.unwrap_or_else(|| config.defaults.source_lang.clone());
            let to = to.unwrap_or_else(|| config.defaults.target_lang.clone());
            warn_if_unknown(&from);
            warn_if_unknown(&to);

            let resolver = Resolver::from_config(&config, &settings_path)?;
            let translated = resolver.resolve(&text.join(" "), &from, &to).await?;
            println!("{translated}");
        }
    }

    Ok(())
}
