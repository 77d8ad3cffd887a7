//! MyMemory provider: the secondary remote service.
//!
//! Sends `GET {url}?q=…&langpair=from|to[&de=…]` and reads
//! `responseData.translatedText` plus the `responseData.match` score.
//! Output is run through [`filter::check`] before it is offered to the
//! resolver.

use async_trait::async_trait;

use crate::config::MyMemoryConfig;
use crate::translate::error::ProviderError;
use crate::translate::filter;
use crate::translate::provider::{ServiceKind, TranslationProvider, TranslationResult};

/// `true` when a `responseStatus` value (number or numeric string) is 200.
fn status_is_ok(status: &serde_json::Value) -> bool {
    match status {
        serde_json::Value::Number(n) => n.as_u64() == Some(200),
        serde_json::Value::String(s) => s.trim() == "200",
        _ => false,
    }
}

/// Interpret a MyMemory response body for `source` translated `from`→`to`.
///
/// MyMemory reports quota and bad-pair errors in-band: HTTP 200, a non-200
/// `responseStatus`, and the error message in `translatedText`.  Those are
/// mapped to [`ProviderError::Status`] so the message is never shown as a
/// translation.
pub(crate) fn parse_response(
    json: &serde_json::Value,
    source: &str,
    from: &str,
    to: &str,
) -> Result<Option<TranslationResult>, ProviderError> {
    if let Some(status) = json.get("responseStatus") {
        if !status_is_ok(status) {
            let details = json["responseDetails"].as_str().unwrap_or_default();
            let message = format!("{status} {details}");
            return Err(ProviderError::Status(message.trim().to_string()));
        }
    }

    let data = &json["responseData"];
    let translated = match data["translatedText"].as_str() {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(None),
    };
    let score = data["match"].as_f64().unwrap_or(0.0);

    if let Some(reason) = filter::check(source, translated, from, to) {
        log::debug!("MyMemory output rejected: {reason:?}");
        return Ok(None);
    }

    Ok(Some(TranslationResult::new(translated, score, ServiceKind::MyMemory)))
}

// ---------------------------------------------------------------------------
// MyMemoryProvider
// ---------------------------------------------------------------------------

pub struct MyMemoryProvider {
    client: reqwest::Client,
    config: MyMemoryConfig,
}

impl MyMemoryProvider {
    pub fn from_config(config: &MyMemoryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn query(&self, text: &str, from: &str, to: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", text.to_string()),
            ("langpair", format!("{from}|{to}")),
        ];
        let email = self.config.contact_email.as_deref().unwrap_or_default();
        if !email.is_empty() {
            params.push(("de", email.to_string()));
        }
        params
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    async fn attempt(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<TranslationResult>, ProviderError> {
        let response = self
            .client
            .get(&self.config.url)
            .query(&self.query(text, from, to))
            .send()
            .await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        parse_response(&json, text, from, to)
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::MyMemory
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::translate::test_server::CannedServer;

    #[test]
    fn parses_translation_and_match() {
        let body = json!({
            "responseData": { "translatedText": "शुभ संध्या", "match": 0.85 },
            "responseStatus": 200
        });
        let result = parse_response(&body, "good evening", "en", "hi")
            .unwrap()
            .unwrap();
        assert_eq!(result.text, "शुभ संध्या");
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.service, ServiceKind::MyMemory);
    }

    #[test]
    fn missing_match_defaults_to_zero() {
        let body = json!({ "responseData": { "translatedText": "bonsoir" } });
        let result = parse_response(&body, "good evening", "en", "fr")
            .unwrap()
            .unwrap();
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn missing_translation_is_no_result() {
        let body = json!({ "responseData": {} });
        assert!(parse_response(&body, "x", "en", "hi").unwrap().is_none());

        let body = json!({ "responseData": { "translatedText": "" } });
        assert!(parse_response(&body, "x", "en", "hi").unwrap().is_none());
    }

    #[test]
    fn in_band_error_status_is_an_error() {
        let body = json!({
            "responseData": { "translatedText": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS" },
            "responseStatus": 429,
            "responseDetails": "quota exceeded"
        });
        assert!(matches!(
            parse_response(&body, "hello", "en", "hi"),
            Err(ProviderError::Status(_))
        ));

        let body = json!({ "responseData": { "translatedText": "x" }, "responseStatus": "403" });
        assert!(parse_response(&body, "hello", "en", "hi").is_err());
    }

    #[test]
    fn string_status_200_is_accepted() {
        let body = json!({
            "responseData": { "translatedText": "hola", "match": 1 },
            "responseStatus": "200"
        });
        let result = parse_response(&body, "hello", "en", "es").unwrap().unwrap();
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn filtered_output_is_no_result() {
        let body = json!({
            "responseData": { "translatedText": "अल्लाह आपका भला करे", "match": 0.99 },
            "responseStatus": 200
        });
        assert!(parse_response(&body, "how are you", "en", "hi")
            .unwrap()
            .is_none());

        let body = json!({
            "responseData": { "translatedText": "project alpha", "match": 1.0 },
            "responseStatus": 200
        });
        assert!(parse_response(&body, "project alpha", "en", "hi")
            .unwrap()
            .is_none());
    }

    #[test]
    fn query_includes_contact_email_when_configured() {
        let config = MyMemoryConfig {
            contact_email: Some("dev@example.com".into()),
            ..MyMemoryConfig::default()
        };
        let provider = MyMemoryProvider::from_config(&config);
        let params = provider.query("hello world", "en", "hi");
        assert_eq!(
            params,
            vec![
                ("q", "hello world".to_string()),
                ("langpair", "en|hi".to_string()),
                ("de", "dev@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn query_omits_contact_email_by_default() {
        let provider = MyMemoryProvider::from_config(&MyMemoryConfig::default());
        let params = provider.query("hello", "en", "hi");
        assert_eq!(params.len(), 2);
    }

    #[tokio::test]
    async fn request_encodes_text_and_language_pair() {
        let body = json!({
            "responseData": { "translatedText": "नमस्ते दुनिया", "match": 0.85 },
            "responseStatus": 200
        });
        let server = CannedServer::start(200, &body.to_string(), "/get").await;
        let config = MyMemoryConfig {
            url: server.url.clone(),
            timeout_secs: 5,
            ..MyMemoryConfig::default()
        };
        let provider = MyMemoryProvider::from_config(&config);

        let result = provider
            .attempt("hello world", "en", "hi")
            .await
            .expect("request succeeds")
            .expect("translation present");
        assert_eq!(result.text, "नमस्ते दुनिया");
        assert_eq!(result.confidence, 0.85);

        let request = server.request().await;
        let request_line = request.lines().next().unwrap_or_default();
        assert!(request_line.starts_with("GET /get?"), "{request_line}");
        assert!(request_line.contains("q=hello+world"), "{request_line}");
        assert!(request_line.contains("langpair=en%7Chi"), "{request_line}");
        assert!(!request_line.contains("de="), "{request_line}");
    }

    #[tokio::test]
    async fn in_band_quota_error_over_http_is_an_error() {
        let body = json!({
            "responseData": { "translatedText": "QUOTA EXCEEDED" },
            "responseStatus": 429
        });
        let server = CannedServer::start(200, &body.to_string(), "/get").await;
        let config = MyMemoryConfig {
            url: server.url.clone(),
            timeout_secs: 5,
            ..MyMemoryConfig::default()
        };
        let provider = MyMemoryProvider::from_config(&config);

        let result = provider.attempt("hello", "en", "hi").await;
        assert!(matches!(result, Err(ProviderError::Status(_))));
    }
}
