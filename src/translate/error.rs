//! Error types for translation resolution and remote providers.

use thiserror::Error;

// ---------------------------------------------------------------------------
// TranslateError
// ---------------------------------------------------------------------------

/// Errors surfaced to callers of [`Resolver`](crate::translate::Resolver).
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The input was empty or whitespace-only.  No lookups were made.
    #[error("empty text provided")]
    EmptyInput,

    /// Every strategy (dictionary, providers, word fallback) came up empty.
    #[error("translation failed - no strategy produced a result")]
    Unavailable,

    /// The user phrase file could not be read or parsed.
    #[error("failed to load phrase dictionary: {0}")]
    Dictionary(String),
}

// ---------------------------------------------------------------------------
// ProviderError
// ---------------------------------------------------------------------------

/// Errors a remote provider can hit on a single attempt.
///
/// The resolver never propagates these; they are logged and the attempt
/// counts as "no result".
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("translation request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("service returned status {0}")]
    Status(String),

    /// The response body was not the JSON shape we expect.
    #[error("failed to parse provider response: {0}")]
    Parse(String),

    /// The response parsed but carried no translated text.
    #[error("provider returned an empty translation")]
    EmptyResponse,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if let Some(status) = e.status() {
            ProviderError::Status(status.as_u16().to_string())
        } else if e.is_decode() {
            ProviderError::Parse(e.to_string())
        } else {
            ProviderError::Request(e.to_string())
        }
    }
}
