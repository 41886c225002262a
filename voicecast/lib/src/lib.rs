//! Voicecast
//!
//! Turns a piece of text into an audio file using a cloud text-to-speech
//! provider.
//!
//! ## Features
//!
//! - **Two providers**: ElevenLabs (cloned voices) and OpenAI speech
//! - **Immutable config**: `TtsConfig` is loaded once and passed by reference
//! - **Errors as values**: every failure is a `TtsError`; the caller decides
//!   the exit status
//!
//! ## Quick Start
//!
//! ```ignore
//! use voicecast_lib::{render, TextSource, TtsConfig};
//!
//! let config = TtsConfig::from_env()?;
//! let text = TextSource::Literal("Hola mundo".into()).resolve().await?;
//! let path = render(&config, &text).await?;
//! ```
//!
//! ## Module Structure
//!
//! - [`types`] - Provider enum and run configuration
//! - [`errors`] - Error types
//! - [`input`] - Input text resolution
//! - [`providers`] - ElevenLabs and OpenAI clients
//! - [`output`] - Writing audio to disk
//! - [`pipeline`] - The end-to-end run

pub mod errors;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod providers;
pub mod traits;
pub mod types;

// Re-export main types at crate root for convenience
pub use errors::TtsError;
pub use input::TextSource;
pub use output::{ensure_output_dir, save_audio};
pub use pipeline::{render, render_with};
pub use providers::cloud::{ElevenLabsProvider, OpenAiProvider};
pub use traits::SpeechSynthesizer;
pub use types::{ElevenLabsSettings, OpenAiSettings, TtsConfig, TtsProvider};
