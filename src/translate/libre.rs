//! LibreTranslate provider: the primary remote service.
//!
//! Sends `POST {url}` with a JSON body `{ q, source, target, format }` and
//! reads `translatedText` from the response.  The service reports no
//! confidence, so every success carries the configured assumed value.

use async_trait::async_trait;
use serde::Serialize;

use crate::config::LibreTranslateConfig;
use crate::translate::error::ProviderError;
use crate::translate::provider::{ServiceKind, TranslationProvider, TranslationResult};

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Extract the translation from a LibreTranslate response body.
pub(crate) fn parse_response(
    json: &serde_json::Value,
    confidence: f64,
) -> Result<TranslationResult, ProviderError> {
    let text = json["translatedText"]
        .as_str()
        .ok_or_else(|| ProviderError::Parse("missing `translatedText` string".into()))?;

    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    Ok(TranslationResult::new(text, confidence, ServiceKind::LibreTranslate))
}

// ---------------------------------------------------------------------------
// LibreTranslateProvider
// ---------------------------------------------------------------------------

pub struct LibreTranslateProvider {
    client: reqwest::Client,
    config: LibreTranslateConfig,
}

impl LibreTranslateProvider {
    /// Build a provider from config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`; a default client is used if the builder fails.
    pub fn from_config(config: &LibreTranslateConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    async fn attempt(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<TranslationResult>, ProviderError> {
        let body = LibreRequest {
            q: text,
            source: from,
            target: to,
            format: "text",
            api_key: self.config.api_key.as_deref().filter(|k| !k.is_empty()),
        };

        let response = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16().to_string()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        parse_response(&json, self.config.assumed_confidence).map(Some)
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::LibreTranslate
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
