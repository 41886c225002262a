//! Cloud-based TTS provider implementations.
//!
//! These providers use HTTP APIs for TTS generation.

mod elevenlabs;
mod openai;

pub use elevenlabs::ElevenLabsProvider;
pub use openai::OpenAiProvider;

use std::time::Duration;

use crate::errors::TtsError;

/// Longest slice of an error body kept in `TtsError::ApiError`.
const MAX_ERROR_BODY: usize = 512;

/// Build the HTTP client shared by the cloud providers.
pub(crate) fn build_http_client(
    provider: &str,
    timeout: Option<Duration>,
) -> Result<reqwest::Client, TtsError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| TtsError::HttpError {
        provider: provider.into(),
        message: e.to_string(),
    })
}

/// Send a prepared request and return the body bytes of a 2xx response.
pub(crate) async fn fetch_audio(
    provider: &str,
    request: reqwest::RequestBuilder,
) -> Result<Vec<u8>, TtsError> {
    let http_error = |e: reqwest::Error| TtsError::HttpError {
        provider: provider.into(),
        message: e.to_string(),
    };

    let response = request.send().await.map_err(http_error)?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TtsError::ApiError {
            provider: provider.into(),
            status: status.as_u16(),
            message: truncate(body.trim(), MAX_ERROR_BODY),
        });
    }

    let bytes = response.bytes().await.map_err(http_error)?;
    Ok(bytes.to_vec())
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("quota exceeded", 512), "quota exceeded");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }

    #[tokio::test]
    async fn test_fetch_audio_connection_refused_is_http_error() {
        let client = build_http_client("mock", Some(Duration::from_secs(2))).unwrap();
        // Port 9 (discard) is not expected to be listening locally.
        let result = fetch_audio("mock", client.get("http://127.0.0.1:9/")).await;
        match result {
            Err(TtsError::HttpError { provider, .. }) => assert_eq!(provider, "mock"),
            other => panic!("Expected HttpError, got {other:?}"),
        }
    }
}
