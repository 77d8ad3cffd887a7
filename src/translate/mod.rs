//! Translation resolution.
//!
//! This module provides:
//! * [`Resolver`]: dictionary → providers → word fallback chain.
//! * [`PhraseDictionary`]: static phrase table, optionally extended from a
//!   user JSON file at startup.
//! * [`TranslationProvider`]: async trait implemented by every remote
//!   service.
//! * [`LibreTranslateProvider`] / [`MyMemoryProvider`]: the two services.
//! * [`TranslateError`] / [`ProviderError`]: error variants.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use text_translator::config::{AppConfig, AppPaths};
//! use text_translator::translate::Resolver;
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings_file = AppPaths::new().settings_file;
//!     let config = AppConfig::load_from(&settings_file).unwrap_or_default();
//!     let resolver = Resolver::from_config(&config, &settings_file).unwrap();
//!
//!     let text = resolver.resolve("nice to meet you", "en", "hi-IN").await.unwrap();
//!     println!("{}", text);
//! }
//! ```

pub mod dictionary;
pub mod error;
pub mod filter;
pub mod language;
pub mod libre;
pub mod mymemory;
pub mod provider;
pub mod resolver;

#[cfg(test)]
mod test_server;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use dictionary::PhraseDictionary;
pub use error::{ProviderError, TranslateError};
pub use language::{find_language, normalize_code, Language, SUPPORTED_LANGUAGES};
pub use libre::LibreTranslateProvider;
pub use mymemory::MyMemoryProvider;
pub use provider::{ServiceKind, TranslationProvider, TranslationResult};
pub use resolver::{translate, Resolver};
