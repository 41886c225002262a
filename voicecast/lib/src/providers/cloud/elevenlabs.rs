//! ElevenLabs cloud TTS provider.
//!
//! Calls the ElevenLabs text-to-speech endpoint for a single voice
//! (typically a cloned one) and returns the MP3 bytes it produces.
//!
//! ## Examples
//!
//! ```ignore
//! use voicecast_lib::{ElevenLabsProvider, SpeechSynthesizer, TtsConfig};
//!
//! let provider = ElevenLabsProvider::new(&config, &settings)?;
//! let audio = provider.synthesize("Hello, world!").await?;
//! ```

use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::errors::TtsError;
use crate::providers::cloud::{build_http_client, fetch_audio};
use crate::traits::SpeechSynthesizer;
use crate::types::{ENV_ELEVENLABS_BASE_URL, ElevenLabsSettings, TtsConfig};

const PROVIDER: &str = "elevenlabs";

/// Header ElevenLabs reads the API key from.
const API_KEY_HEADER: &str = "xi-api-key";

/// Body of `POST /v1/text-to-speech/{voice_id}`.
#[derive(Debug, Serialize)]
struct CreateSpeechBody<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_id: Option<&'a str>,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// ElevenLabs cloud TTS provider.
pub struct ElevenLabsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    settings: ElevenLabsSettings,
}

impl std::fmt::Debug for ElevenLabsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsProvider")
            .field("base_url", &self.base_url)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ElevenLabsProvider {
    /// Create a provider from the run configuration.
    ///
    /// A missing API key or voice id is logged but not rejected; the API's
    /// own response becomes the error.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::HttpError` if the HTTP client cannot be built.
    pub fn new(config: &TtsConfig, settings: &ElevenLabsSettings) -> Result<Self, TtsError> {
        if config.api_key.is_none() {
            tracing::warn!(
                provider = PROVIDER,
                "API_KEY is not set; the request will likely be rejected"
            );
        }
        if settings.voice_id.is_none() {
            tracing::warn!(
                provider = PROVIDER,
                "VOICE_ID is not set; the request will likely be rejected"
            );
        }

        Ok(Self {
            client: build_http_client(PROVIDER, config.timeout)?,
            base_url: config.elevenlabs_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            settings: settings.clone(),
        })
    }

    /// `{base}/v1/text-to-speech/{voice_id}`, with the voice id encoded as a
    /// single path segment.
    fn speech_url(&self) -> Result<Url, TtsError> {
        let invalid = |message: String| TtsError::InvalidConfig {
            key: ENV_ELEVENLABS_BASE_URL.into(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("'{}' cannot be used as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend([
                "v1",
                "text-to-speech",
                self.settings.voice_id.as_deref().unwrap_or_default(),
            ]);
        Ok(url)
    }
}

impl SpeechSynthesizer for ElevenLabsProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsError> {
        let body = CreateSpeechBody {
            text,
            model_id: self.settings.model_id.as_deref(),
            voice_settings: VoiceSettings {
                stability: self.settings.stability,
                similarity_boost: self.settings.similarity_boost,
            },
        };

        tracing::debug!(
            voice_id = ?self.settings.voice_id,
            text_len = text.len(),
            "Sending ElevenLabs TTS request"
        );

        let request = self
            .client
            .post(self.speech_url()?)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "audio/mpeg")
            .json(&body);

        let audio = fetch_audio(PROVIDER, request).await?;

        tracing::debug!(audio_size = audio.len(), "Received ElevenLabs audio response");

        Ok(audio)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TtsProvider;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(voice_id: Option<&str>) -> ElevenLabsSettings {
        ElevenLabsSettings {
            voice_id: voice_id.map(String::from),
            ..Default::default()
        }
    }

    fn config_for(server: &MockServer) -> TtsConfig {
        TtsConfig::new(TtsProvider::ElevenLabs(settings(Some("voice-123"))))
            .with_api_key("test-key")
            .with_elevenlabs_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_synthesize_sends_voice_settings_and_key() {
        let server = MockServer::start().await;
        let audio = vec![0x00, 0x01, 0xFF, 0xFB];

        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/voice-123"))
            .and(header("xi-api-key", "test-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "text": "Hola mundo",
                "voice_settings": { "stability": 0.7, "similarity_boost": 0.9 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let provider =
            ElevenLabsProvider::new(&config_for(&server), &settings(Some("voice-123"))).unwrap();
        let result = provider.synthesize("Hola mundo").await.unwrap();
        assert_eq!(result, audio);
    }

    #[tokio::test]
    async fn test_synthesize_includes_model_when_configured() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/voice-123"))
            .and(body_json(serde_json::json!({
                "text": "hi",
                "model_id": "eleven_multilingual_v2",
                "voice_settings": { "stability": 0.7, "similarity_boost": 0.9 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
            .expect(1)
            .mount(&server)
            .await;

        let mut with_model = settings(Some("voice-123"));
        with_model.model_id = Some("eleven_multilingual_v2".into());
        let provider = ElevenLabsProvider::new(&config_for(&server), &with_model).unwrap();
        assert_eq!(provider.synthesize("hi").await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let provider =
            ElevenLabsProvider::new(&config_for(&server), &settings(Some("voice-123"))).unwrap();
        match provider.synthesize("Hola mundo").await {
            Err(TtsError::ApiError { provider, status, message }) => {
                assert_eq!(provider, "elevenlabs");
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejected_key_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": { "status": "invalid_api_key" }
            })))
            .mount(&server)
            .await;

        let provider =
            ElevenLabsProvider::new(&config_for(&server), &settings(Some("voice-123"))).unwrap();
        let result = provider.synthesize("hi").await;
        assert!(matches!(result, Err(TtsError::ApiError { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_missing_voice_id_is_not_prevalidated() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let provider = ElevenLabsProvider::new(&config_for(&server), &settings(None)).unwrap();
        let result = provider.synthesize("hi").await;
        assert!(matches!(result, Err(TtsError::ApiError { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_voice_id_is_encoded_as_one_path_segment() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/a%2Fb%3Fc%23d"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![5]))
            .expect(1)
            .mount(&server)
            .await;

        let odd_voice = settings(Some("a/b?c#d"));
        let provider = ElevenLabsProvider::new(&config_for(&server), &odd_voice).unwrap();
        assert_eq!(provider.synthesize("hi").await.unwrap(), vec![5]);
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/proxy/v1/text-to-speech/voice-123"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![6]))
            .expect(1)
            .mount(&server)
            .await;

        let config =
            config_for(&server).with_elevenlabs_base_url(format!("{}/proxy/", server.uri()));
        let provider = ElevenLabsProvider::new(&config, &settings(Some("voice-123"))).unwrap();
        assert_eq!(provider.synthesize("hi").await.unwrap(), vec![6]);
    }

    #[tokio::test]
    async fn test_unparseable_base_url_is_invalid_config() {
        let config = TtsConfig::new(TtsProvider::ElevenLabs(settings(Some("voice-123"))))
            .with_elevenlabs_base_url("not a url");
        let provider = ElevenLabsProvider::new(&config, &settings(Some("voice-123"))).unwrap();

        match provider.synthesize("hi").await {
            Err(TtsError::InvalidConfig { key, .. }) => assert_eq!(key, "ELEVENLABS_BASE_URL"),
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config =
            TtsConfig::new(TtsProvider::ElevenLabs(settings(None))).with_api_key("xi-secret");
        let provider = ElevenLabsProvider::new(&config, &settings(None)).unwrap();
        assert!(!format!("{provider:?}").contains("xi-secret"));
    }
}
