//! Traits for the voicecast provider layer.
//!
//! This module defines the trait every cloud provider client implements.

use crate::errors::TtsError;

/// A client that turns text into encoded audio bytes.
///
/// ## Native Async Traits
///
/// This trait uses native Rust async functions in traits (AFIT), available
/// since Rust 1.75. No `async-trait` crate is needed.
///
/// ## Examples
///
/// ```ignore
/// use voicecast_lib::{SpeechSynthesizer, TtsError};
///
/// struct Silence;
///
/// impl SpeechSynthesizer for Silence {
///     fn provider_name(&self) -> &'static str { "silence" }
///
///     async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, TtsError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait SpeechSynthesizer: Send + Sync {
    /// Identifier used in logs and errors.
    fn provider_name(&self) -> &'static str;

    /// Send `text` to the provider and return the audio payload verbatim.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::HttpError` when the request cannot be completed and
    /// `TtsError::ApiError` when the provider rejects it.
    fn synthesize(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, TtsError>> + Send;
}

// ============================================================================
// Tests
// ============================================================================
