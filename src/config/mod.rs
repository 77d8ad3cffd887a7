//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), one sub-config per provider
//! and for the resolver, `AppPaths` for cross-platform config locations, and
//! TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    AppConfig, DefaultsConfig, DictionaryConfig, LibreTranslateConfig, MyMemoryConfig,
    ResolverConfig,
};
