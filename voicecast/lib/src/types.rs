//! Core types for voicecast.
//!
//! This module defines the configuration value built once at startup:
//! - The closed `TtsProvider` enum with each provider's own settings
//! - `TtsConfig`, the immutable run configuration loaded from the environment

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::TtsError;

// ============================================================================
// Environment keys
// ============================================================================

/// Credential for whichever provider is active.
pub const ENV_API_KEY: &str = "API_KEY";
/// ElevenLabs voice identifier (usually a cloned voice).
pub const ENV_VOICE_ID: &str = "VOICE_ID";
/// Selects the active provider.
pub const ENV_PROVIDER: &str = "TTS_PROVIDER";
/// Optional ElevenLabs model.
pub const ENV_ELEVENLABS_MODEL_ID: &str = "ELEVENLABS_MODEL_ID";
/// Optional OpenAI voice override.
pub const ENV_OPENAI_VOICE: &str = "OPENAI_TTS_VOICE";
/// Output directory override.
pub const ENV_OUTPUT_DIR: &str = "TTS_OUTPUT_DIR";
/// Request timeout in seconds; `0` disables it.
pub const ENV_TIMEOUT_SECS: &str = "TTS_TIMEOUT_SECS";
/// ElevenLabs endpoint override.
pub const ENV_ELEVENLABS_BASE_URL: &str = "ELEVENLABS_BASE_URL";
/// OpenAI endpoint override.
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

// ============================================================================
// Defaults
// ============================================================================

/// Provider used when `TTS_PROVIDER` is not set.
pub const DEFAULT_PROVIDER: &str = "elevenlabs";
/// Directory audio files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "audio_outputs";
/// Request timeout applied unless overridden.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

pub const DEFAULT_STABILITY: f32 = 0.7;
pub const DEFAULT_SIMILARITY_BOOST: f32 = 0.9;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini-tts";
pub const DEFAULT_OPENAI_VOICE: &str = "alloy";

// ============================================================================
// Provider settings
// ============================================================================

/// Parameters for an ElevenLabs synthesis request.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevenLabsSettings {
    /// Voice to synthesize with. Not validated before the request is sent.
    pub voice_id: Option<String>,
    /// Model to request; the API picks its own default when `None`.
    pub model_id: Option<String>,
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for ElevenLabsSettings {
    fn default() -> Self {
        Self {
            voice_id: None,
            model_id: None,
            stability: DEFAULT_STABILITY,
            similarity_boost: DEFAULT_SIMILARITY_BOOST,
        }
    }
}

/// Parameters for an OpenAI speech request.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings {
    pub model: String,
    pub voice: String,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_OPENAI_MODEL.into(),
            voice: DEFAULT_OPENAI_VOICE.into(),
        }
    }
}

// ============================================================================
// TTS Provider
// ============================================================================

/// The supported cloud TTS providers, each with its own request settings.
#[derive(Debug, Clone, PartialEq)]
pub enum TtsProvider {
    /// ElevenLabs text-to-speech (supports cloned voices).
    ElevenLabs(ElevenLabsSettings),
    /// OpenAI speech synthesis.
    OpenAi(OpenAiSettings),
}

impl TtsProvider {
    /// Parse a provider name (case-insensitive) and collect its settings
    /// through `lookup`.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::UnsupportedProvider` for any name other than
    /// `elevenlabs` or `openai`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use voicecast_lib::TtsProvider;
    ///
    /// let provider = TtsProvider::from_name("OpenAI", |_| None).unwrap();
    /// assert_eq!(provider.name(), "openai");
    /// assert!(TtsProvider::from_name("festival", |_| None).is_err());
    /// ```
    pub fn from_name<F>(name: &str, lookup: F) -> Result<Self, TtsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match name.trim().to_lowercase().as_str() {
            "elevenlabs" => Ok(TtsProvider::ElevenLabs(ElevenLabsSettings {
                voice_id: non_empty(lookup(ENV_VOICE_ID)),
                model_id: non_empty(lookup(ENV_ELEVENLABS_MODEL_ID)),
                ..Default::default()
            })),
            "openai" => Ok(TtsProvider::OpenAi(OpenAiSettings {
                voice: non_empty(lookup(ENV_OPENAI_VOICE))
                    .unwrap_or_else(|| DEFAULT_OPENAI_VOICE.into()),
                ..Default::default()
            })),
            _ => Err(TtsError::UnsupportedProvider { name: name.into() }),
        }
    }

    /// Lowercase identifier used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TtsProvider::ElevenLabs(_) => "elevenlabs",
            TtsProvider::OpenAi(_) => "openai",
        }
    }

    /// The fixed file name this provider's audio is written to.
    pub fn output_filename(&self) -> &'static str {
        match self {
            TtsProvider::ElevenLabs(_) => "output_elevenlabs.mp3",
            TtsProvider::OpenAi(_) => "output_openai.mp3",
        }
    }
}

// ============================================================================
// TTS Config
// ============================================================================

/// Immutable configuration for one run.
///
/// Built once at startup (usually via [`TtsConfig::from_env`]) and passed by
/// reference to every component.
#[derive(Clone, PartialEq)]
pub struct TtsConfig {
    /// Credential for the active provider.
    pub api_key: Option<String>,
    /// Which provider to call, and how.
    pub provider: TtsProvider,
    /// Where audio files land.
    pub output_dir: PathBuf,
    /// Request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub elevenlabs_base_url: String,
    pub openai_base_url: String,
}

impl std::fmt::Debug for TtsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("provider", &self.provider)
            .field("output_dir", &self.output_dir)
            .field("timeout", &self.timeout)
            .field("elevenlabs_base_url", &self.elevenlabs_base_url)
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}

impl TtsConfig {
    /// Configuration for `provider` with every other value at its default.
    pub fn new(provider: TtsProvider) -> Self {
        Self {
            api_key: None,
            provider,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            elevenlabs_base_url: ELEVENLABS_BASE_URL.into(),
            openai_base_url: OPENAI_BASE_URL.into(),
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, TtsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. Required credentials are not
    /// checked here; a missing key surfaces as a provider rejection.
    ///
    /// ## Errors
    ///
    /// - `TtsError::UnsupportedProvider` for an unknown `TTS_PROVIDER`
    /// - `TtsError::InvalidConfig` for a non-numeric `TTS_TIMEOUT_SECS`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TtsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider_name =
            non_empty(lookup(ENV_PROVIDER)).unwrap_or_else(|| DEFAULT_PROVIDER.into());
        let provider = TtsProvider::from_name(&provider_name, &lookup)?;

        let mut config = Self::new(provider);
        config.api_key = non_empty(lookup(ENV_API_KEY));

        if let Some(dir) = non_empty(lookup(ENV_OUTPUT_DIR)) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(secs) = non_empty(lookup(ENV_TIMEOUT_SECS)) {
            let secs: u64 = secs.parse().map_err(|_| TtsError::InvalidConfig {
                key: ENV_TIMEOUT_SECS.into(),
                message: format!("expected a whole number of seconds, got '{secs}'"),
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(url) = non_empty(lookup(ENV_ELEVENLABS_BASE_URL)) {
            config.elevenlabs_base_url = url;
        }
        if let Some(url) = non_empty(lookup(ENV_OPENAI_BASE_URL)) {
            config.openai_base_url = url;
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_elevenlabs_base_url(mut self, url: impl Into<String>) -> Self {
        self.elevenlabs_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = url.into();
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
