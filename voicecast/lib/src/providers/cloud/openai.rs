//! OpenAI cloud TTS provider.
//!
//! Uses the `/v1/audio/speech` endpoint with a fixed model and a stock
//! (non-cloned) voice.

use serde::Serialize;

use crate::errors::TtsError;
use crate::providers::cloud::{build_http_client, fetch_audio};
use crate::traits::SpeechSynthesizer;
use crate::types::{OpenAiSettings, TtsConfig};

const PROVIDER: &str = "openai";

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

/// OpenAI cloud TTS provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    settings: OpenAiSettings,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("base_url", &self.base_url)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl OpenAiProvider {
    /// Create a provider from the run configuration.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::HttpError` if the HTTP client cannot be built.
    pub fn new(config: &TtsConfig, settings: &OpenAiSettings) -> Result<Self, TtsError> {
        if config.api_key.is_none() {
            tracing::warn!(
                provider = PROVIDER,
                "API_KEY is not set; the request will likely be rejected"
            );
        }

        Ok(Self {
            client: build_http_client(PROVIDER, config.timeout)?,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            settings: settings.clone(),
        })
    }
}

impl SpeechSynthesizer for OpenAiProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError> {
        tracing::info!(
            model = %self.settings.model,
            voice = %self.settings.voice,
            "Sending text to OpenAI TTS"
        );

        let request = self
            .client
            .post(format!("{}/v1/audio/speech", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&SpeechRequest {
                model: &self.settings.model,
                voice: &self.settings.voice,
                input: text,
            });

        let audio = fetch_audio(PROVIDER, request).await?;

        tracing::debug!(audio_size = audio.len(), "Received OpenAI audio response");

        Ok(audio)
    }
}
