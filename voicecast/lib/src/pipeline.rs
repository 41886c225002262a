//! The single text → provider → file run.

use std::path::{Path, PathBuf};

use crate::errors::TtsError;
use crate::output::save_audio;
use crate::providers::cloud::{ElevenLabsProvider, OpenAiProvider};
use crate::traits::SpeechSynthesizer;
use crate::types::{TtsConfig, TtsProvider};

/// Synthesize `text` with the configured provider and write the result.
///
/// ## Returns
///
/// The path of the audio file that was written.
///
/// ## Errors
///
/// - `TtsError::EmptyInput` if `text` is blank; no request is made
/// - `TtsError::HttpError` / `TtsError::ApiError` from the provider; nothing is written
/// - `TtsError::OutputWrite` if the file cannot be saved
pub async fn render(config: &TtsConfig, text: &str) -> Result<PathBuf, TtsError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TtsError::EmptyInput);
    }

    tracing::info!(provider = config.provider.name(), "Generating audio");

    let filename = config.provider.output_filename();
    match &config.provider {
        TtsProvider::ElevenLabs(settings) => {
            let provider = ElevenLabsProvider::new(config, settings)?;
            render_with(&provider, &config.output_dir, filename, text).await
        }
        TtsProvider::OpenAi(settings) => {
            let provider = OpenAiProvider::new(config, settings)?;
            render_with(&provider, &config.output_dir, filename, text).await
        }
    }
}

/// Run one synthesis through `synth` and save it as `output_dir/filename`.
pub async fn render_with<S: SpeechSynthesizer>(
    synth: &S,
    output_dir: &Path,
    filename: &str,
    text: &str,
) -> Result<PathBuf, TtsError> {
    tracing::debug!(
        provider = synth.provider_name(),
        text_len = text.len(),
        "Dispatching synthesis"
    );
    let audio = synth.synthesize(text).await?;
    save_audio(output_dir, filename, &audio).await
}

// ============================================================================
// Tests
// ============================================================================
