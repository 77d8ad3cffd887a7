//! The translation resolver: dictionary first, then remote providers, then
//! word-by-word substitution.
//!
//! Resolution order for `resolve(text, from, to)`:
//!
//! 1. Exact phrase lookup in the [`PhraseDictionary`] using the codes as
//!    given.  A hit returns without touching the network.
//! 2. Regional subtags are stripped from both codes (`"hi-IN"` → `"hi"`).
//! 3. Each provider stage is attempted in order.  A result whose confidence
//!    is strictly above the stage's gate is returned at once; anything else
//!    is kept as a last-resort candidate.  Provider errors are logged and
//!    skipped.
//! 4. Short inputs (≤ `word_fallback_max_tokens` tokens) are translated token
//!    by token from the dictionary, returned only if some token changed.
//! 5. The first candidate kept in step 3, else
//!    [`TranslateError::Unavailable`].
//!
//! Providers are awaited one after another; the next stage starts only once
//! the previous one has answered or failed.

use std::path::Path;

use crate::config::{AppConfig, AppPaths};
use crate::translate::dictionary::PhraseDictionary;
use crate::translate::error::TranslateError;
use crate::translate::language::normalize_code;
use crate::translate::libre::LibreTranslateProvider;
use crate::translate::mymemory::MyMemoryProvider;
use crate::translate::provider::{TranslationProvider, TranslationResult};

/// Default token limit for the word-by-word fallback.
pub const DEFAULT_WORD_FALLBACK_MAX_TOKENS: usize = 3;

// ---------------------------------------------------------------------------
// ProviderStage
// ---------------------------------------------------------------------------

/// A provider plus the confidence it must exceed to end resolution early.
struct ProviderStage {
    provider: Box<dyn TranslationProvider>,
    accept_above: f64,
}

impl ProviderStage {
    fn new(provider: Box<dyn TranslationProvider>, accept_above: f64) -> Self {
        Self {
            provider,
            accept_above,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Best-effort translator over a fixed dictionary and an ordered provider
/// chain.  Holds no mutable state; share it behind an `Arc` freely.
///
/// # Example
/// ```rust
/// use text_translator::translate::{PhraseDictionary, Resolver};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let resolver = Resolver::new(PhraseDictionary::builtin());
/// let text = resolver.resolve("Thank you", "en", "hi").await.unwrap();
/// assert_eq!(text, "धन्यवाद");
/// # }
/// ```
pub struct Resolver {
    dictionary: PhraseDictionary,
    stages: Vec<ProviderStage>,
    word_fallback_max_tokens: usize,
}

impl Resolver {
    /// Resolver with `dictionary` and no remote providers.
    pub fn new(dictionary: PhraseDictionary) -> Self {
        Self {
            dictionary,
            stages: Vec::new(),
            word_fallback_max_tokens: DEFAULT_WORD_FALLBACK_MAX_TOKENS,
        }
    }

    /// Append a provider stage.  Stages are attempted in insertion order and
    /// earlier stages win the last-resort tie-break.
    pub fn with_provider<P>(mut self, provider: P, accept_above: f64) -> Self
    where
        P: TranslationProvider + 'static,
    {
        self.stages
            .push(ProviderStage::new(Box::new(provider), accept_above));
        self
    }

    pub fn with_word_fallback_max_tokens(mut self, max_tokens: usize) -> Self {
        self.word_fallback_max_tokens = max_tokens;
        self
    }

    /// Build the standard chain from config: built-in and user phrases,
    /// LibreTranslate then MyMemory (each only when enabled).
    ///
    /// `settings_file` is where `config` was loaded from; the user phrase
    /// file defaults to `phrases.json` beside it.
    pub fn from_config(config: &AppConfig, settings_file: &Path) -> Result<Self, TranslateError> {
        let phrases_file = config.dictionary.resolved_path(settings_file);
        let dictionary = PhraseDictionary::with_user_file(&phrases_file)?;

        let mut resolver = Self::new(dictionary)
            .with_word_fallback_max_tokens(config.resolver.word_fallback_max_tokens);

        if config.libretranslate.enabled {
            resolver = resolver.with_provider(
                LibreTranslateProvider::from_config(&config.libretranslate),
                config.resolver.primary_threshold,
            );
        }
        if config.mymemory.enabled {
            resolver = resolver.with_provider(
                MyMemoryProvider::from_config(&config.mymemory),
                config.resolver.secondary_threshold,
            );
        }

        Ok(resolver)
    }

    pub fn dictionary(&self) -> &PhraseDictionary {
        &self.dictionary
    }

    /// Translate `text` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// * [`TranslateError::EmptyInput`] – `text` is blank; nothing is tried.
    /// * [`TranslateError::Unavailable`] – every strategy came up empty.
    pub async fn resolve(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        if let Some(hit) = self.dictionary.lookup(text, from, to) {
            log::debug!("dictionary hit for {from}-{to}");
            return Ok(hit.to_string());
        }

        let from_code = normalize_code(from);
        let to_code = normalize_code(to);

        let mut candidates: Vec<TranslationResult> = Vec::new();
        for stage in &self.stages {
            let service = stage.provider.service();
            match stage.provider.attempt(text, from_code, to_code).await {
                Ok(Some(result)) if result.confidence > stage.accept_above => {
                    log::debug!(
                        "{service} accepted (confidence {:.2} > {:.2})",
                        result.confidence,
                        stage.accept_above
                    );
                    return Ok(result.text);
                }
                Ok(Some(result)) => {
                    log::debug!(
                        "{service} below gate (confidence {:.2} <= {:.2})",
                        result.confidence,
                        stage.accept_above
                    );
                    candidates.push(result);
                }
                Ok(None) => log::debug!("{service} produced no usable result"),
                Err(e) => log::warn!("{service} failed: {e}"),
            }
        }

        if let Some(words) = self.word_fallback(text, from, to) {
            log::debug!("word-level fallback used");
            return Ok(words);
        }

        candidates
            .into_iter()
            .next()
            .map(|result| {
                log::debug!("falling back to low-confidence {} result", result.service);
                result.text
            })
            .ok_or(TranslateError::Unavailable)
    }

    /// Token-by-token dictionary substitution for short inputs.
    ///
    /// Returns `None` when the input is too long or no token changed.
    fn word_fallback(&self, text: &str, from: &str, to: &str) -> Option<String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() > self.word_fallback_max_tokens {
            return None;
        }

        let mut changed = false;
        let mut translated = Vec::with_capacity(tokens.len());
        for token in tokens {
            match self.dictionary.lookup(token, from, to) {
                Some(hit) if hit != token => {
                    changed = true;
                    translated.push(hit);
                }
                _ => translated.push(token),
            }
        }

        changed.then(|| translated.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Convenience
// ---------------------------------------------------------------------------

/// Resolve with the default configuration and the platform phrase file.
///
/// Builds a fresh [`Resolver`] per call; long-lived callers should build one
/// with [`Resolver::from_config`] and reuse it.
pub async fn translate(text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
    let settings_file = AppPaths::new().settings_file;
    Resolver::from_config(&AppConfig::default(), &settings_file)?
        .resolve(text, from, to)
        .await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
