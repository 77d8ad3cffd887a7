//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.
//! Every section carries `#[serde(default)]`, so a partial `settings.toml`
//! only overrides the keys it names.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// DefaultsConfig
// ---------------------------------------------------------------------------

/// Language pair used by the CLI when `--from` / `--to` are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub source_lang: String,
    pub target_lang: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source_lang: "en".into(),
            target_lang: "hi".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ResolverConfig
// ---------------------------------------------------------------------------

/// Acceptance gates for the fallback chain.
///
/// The thresholds are strict: a result is accepted only when its confidence
/// is *greater than* the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Gate for the primary provider (LibreTranslate).
    pub primary_threshold: f64,
    /// Gate for the secondary provider (MyMemory).
    pub secondary_threshold: f64,
    /// Word-by-word dictionary fallback only runs for inputs with at most
    /// this many whitespace-separated tokens.
    pub word_fallback_max_tokens: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            primary_threshold: 0.7,
            secondary_threshold: 0.8,
            word_fallback_max_tokens: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// LibreTranslateConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibreTranslateConfig {
    pub enabled: bool,
    /// Full URL of the `/translate` endpoint.
    pub url: String,
    /// API key, `None` for public or self-hosted instances without auth.
    pub api_key: Option<String>,
    /// Confidence attached to every successful response.  The service does
    /// not report one itself.
    pub assumed_confidence: f64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://libretranslate.de/translate".into(),
            api_key: None,
            assumed_confidence: 0.9,
            timeout_secs: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// MyMemoryConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MyMemoryConfig {
    pub enabled: bool,
    /// Full URL of the `/get` endpoint.
    pub url: String,
    /// Sent as the `de` parameter; raises the anonymous daily quota.
    pub contact_email: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for MyMemoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://api.mymemory.translated.net/get".into(),
            contact_email: None,
            timeout_secs: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// DictionaryConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// JSON file with extra phrases.  `None` means `phrases.json` beside
    /// `settings.toml`.
    pub user_phrases_file: Option<PathBuf>,
}

impl DictionaryConfig {
    /// The phrase file to load for settings read from `settings_file`.
    pub fn resolved_path(&self, settings_file: &Path) -> PathBuf {
        self.user_phrases_file
            .clone()
            .unwrap_or_else(|| settings_file.with_file_name("phrases.json"))
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use text_translator::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub resolver: ResolverConfig,
    pub libretranslate: LibreTranslateConfig,
    pub mymemory: MyMemoryConfig,
    pub dictionary: DictionaryConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.defaults.source_lang, default.defaults.source_lang);
        assert_eq!(config.libretranslate.url, default.libretranslate.url);
        assert_eq!(
            config.resolver.word_fallback_max_tokens,
            default.resolver.word_fallback_max_tokens
        );
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.defaults.source_lang, "en");
        assert_eq!(cfg.defaults.target_lang, "hi");
        assert_eq!(cfg.resolver.primary_threshold, 0.7);
        assert_eq!(cfg.resolver.secondary_threshold, 0.8);
        assert_eq!(cfg.resolver.word_fallback_max_tokens, 3);
        assert!(cfg.libretranslate.enabled);
        assert_eq!(cfg.libretranslate.url, "https://libretranslate.de/translate");
        assert_eq!(cfg.libretranslate.assumed_confidence, 0.9);
        assert!(cfg.libretranslate.api_key.is_none());
        assert_eq!(cfg.mymemory.url, "https://api.mymemory.translated.net/get");
        assert!(cfg.mymemory.contact_email.is_none());
        assert!(cfg.dictionary.user_phrases_file.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(
            &path,
            "[resolver]\nsecondary_threshold = 0.5\n\n[mymemory]\nenabled = false\n",
        )
        .expect("write");

        let cfg = AppConfig::load_from(&path).expect("load");
        assert_eq!(cfg.resolver.secondary_threshold, 0.5);
        assert_eq!(cfg.resolver.primary_threshold, 0.7);
        assert!(!cfg.mymemory.enabled);
        assert!(cfg.libretranslate.enabled);
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.defaults.target_lang = "ta".into();
        cfg.libretranslate.url = "http://localhost:5000/translate".into();
        cfg.libretranslate.api_key = Some("lt-key".into());
        cfg.mymemory.contact_email = Some("dev@example.com".into());
        cfg.resolver.word_fallback_max_tokens = 5;
        cfg.dictionary.user_phrases_file = Some(dir.path().join("custom.json"));

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.defaults.target_lang, "ta");
        assert_eq!(loaded.libretranslate.url, "http://localhost:5000/translate");
        assert_eq!(loaded.libretranslate.api_key, Some("lt-key".into()));
        assert_eq!(loaded.mymemory.contact_email, Some("dev@example.com".into()));
        assert_eq!(loaded.resolver.word_fallback_max_tokens, 5);
        assert_eq!(
            loaded.dictionary.resolved_path(&path),
            dir.path().join("custom.json")
        );
    }

    #[test]
    fn phrases_default_to_settings_directory() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        AppConfig::default().save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.dictionary.user_phrases_file, None);
        assert_eq!(
            loaded.dictionary.resolved_path(&path),
            dir.path().join("phrases.json")
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[resolver\nprimary_threshold = ").expect("write");

        assert!(AppConfig::load_from(&path).is_err());
    }
}
