//! The provider seam shared by every remote translation service.
//!
//! Implementors must be `Send + Sync` so a [`Resolver`](crate::translate::Resolver)
//! holding them can be shared across tasks behind an `Arc`.

use std::fmt;

use async_trait::async_trait;

use crate::translate::error::ProviderError;

// ---------------------------------------------------------------------------
// ServiceKind
// ---------------------------------------------------------------------------

/// Which service produced a [`TranslationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    LibreTranslate,
    MyMemory,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::LibreTranslate => f.write_str("LibreTranslate"),
            ServiceKind::MyMemory => f.write_str("MyMemory"),
        }
    }
}

// ---------------------------------------------------------------------------
// TranslationResult
// ---------------------------------------------------------------------------

/// One provider's answer for a single resolution attempt.
///
/// `confidence` is only meaningful as an acceptance gate for the provider
/// that produced it: LibreTranslate reports a fixed assumed value, MyMemory
/// its translation-memory match ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub text: String,
    pub confidence: f64,
    pub service: ServiceKind,
}

impl TranslationResult {
    /// Build a result, clamping `confidence` into `[0, 1]`.
    pub fn new(text: impl Into<String>, confidence: f64, service: ServiceKind) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            text: text.into(),
            confidence,
            service,
        }
    }
}

// ---------------------------------------------------------------------------
// TranslationProvider trait
// ---------------------------------------------------------------------------

/// A remote translation service that can be attempted once per resolution.
///
/// * `Ok(Some(result))` – the service produced a usable translation.
/// * `Ok(None)`         – the service answered but its output was rejected
///                        (filtered or empty); not an error.
/// * `Err(e)`           – transport, status or parse failure.
///
/// `from` and `to` are bare language codes; `from` may be `"auto"`.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn attempt(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<TranslationResult>, ProviderError>;

    /// Service identity, used for logging.
    fn service(&self) -> ServiceKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        let high = TranslationResult::new("x", 1.7, ServiceKind::MyMemory);
        let low = TranslationResult::new("x", -0.2, ServiceKind::MyMemory);
        let nan = TranslationResult::new("x", f64::NAN, ServiceKind::MyMemory);
        assert_eq!(high.confidence, 1.0);
        assert_eq!(low.confidence, 0.0);
        assert_eq!(nan.confidence, 0.0);
    }

    #[test]
    fn service_display_names() {
        assert_eq!(ServiceKind::LibreTranslate.to_string(), "LibreTranslate");
        assert_eq!(ServiceKind::MyMemory.to_string(), "MyMemory");
    }
}
