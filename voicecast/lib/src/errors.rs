use std::path::PathBuf;

/// Errors that can occur while turning text into an audio file.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// The input text file could not be read.
    #[error("Failed to read input file '{}'", path.display())]
    InputRead {
        /// The file that was requested.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No usable text remained after trimming.
    #[error("No valid text was provided")]
    EmptyInput,

    /// The interactive prompt could not collect any text.
    #[error("Failed to read text from prompt: {message}")]
    PromptFailed {
        /// Description of the prompt failure.
        message: String,
    },

    /// The configured provider name is not one we know how to call.
    #[error("TTS provider '{name}' is not supported (expected 'elevenlabs' or 'openai')")]
    UnsupportedProvider {
        /// The name as it was configured.
        name: String,
    },

    /// An optional setting was present but malformed.
    #[error("Invalid value for {key}: {message}")]
    InvalidConfig {
        /// The environment key holding the bad value.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("HTTP request to {provider} failed: {message}")]
    HttpError {
        /// The provider being contacted.
        provider: String,
        /// The transport error.
        message: String,
    },

    /// The provider answered with a non-success status.
    #[error("{provider} API error ({status}): {message}")]
    ApiError {
        /// The provider that rejected the request.
        provider: String,
        /// HTTP status code returned.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// The audio bytes could not be persisted.
    #[error("Failed to write audio to '{}'", path.display())]
    OutputWrite {
        /// The destination path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
