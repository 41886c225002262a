//! Resolves the text to synthesize.
//!
//! Sources are checked in priority order: a file path, then literal text,
//! then an interactive prompt.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use crate::errors::TtsError;

const PROMPT_MESSAGE: &str = "Enter the text you want to convert to speech:";

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Read the whole file as UTF-8.
    File(PathBuf),
    /// Use the given text as-is.
    Literal(String),
    /// Ask the user.
    Prompt,
}

impl TextSource {
    /// Pick a source from the optional CLI inputs; a file wins over text.
    ///
    /// ## Examples
    ///
    /// ```
    /// use voicecast_lib::TextSource;
    ///
    /// let source = TextSource::from_args(None, Some("Hola mundo".into()));
    /// assert_eq!(source, TextSource::Literal("Hola mundo".into()));
    /// assert_eq!(TextSource::from_args(None, None), TextSource::Prompt);
    /// ```
    pub fn from_args(file: Option<PathBuf>, text: Option<String>) -> Self {
        match (file, text) {
            (Some(path), _) => TextSource::File(path),
            (None, Some(text)) => TextSource::Literal(text),
            (None, None) => TextSource::Prompt,
        }
    }

    /// Resolve using the terminal prompt (or piped stdin) when needed.
    pub async fn resolve(self) -> Result<String, TtsError> {
        self.resolve_with(prompt_for_text).await
    }

    /// Resolve the text, calling `prompt` only for [`TextSource::Prompt`].
    ///
    /// The result is trimmed. Emptiness is not checked here.
    ///
    /// ## Errors
    ///
    /// - `TtsError::InputRead` if the file cannot be read
    /// - whatever `prompt` returns
    pub async fn resolve_with<P>(self, prompt: P) -> Result<String, TtsError>
    where
        P: FnOnce() -> Result<String, TtsError>,
    {
        let raw = match self {
            TextSource::File(path) => tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| TtsError::InputRead { path, source })?,
            TextSource::Literal(text) => text,
            TextSource::Prompt => prompt()?,
        };

        Ok(raw.trim().to_string())
    }
}

/// Ask for text on a terminal, or read piped stdin to the end.
fn prompt_for_text() -> Result<String, TtsError> {
    if io::stdin().is_terminal() {
        inquire::Text::new(PROMPT_MESSAGE)
            .prompt()
            .map_err(|e| TtsError::PromptFailed {
                message: e.to_string(),
            })
    } else {
        read_piped_text(io::stdin().lock())
    }
}

/// Read `reader` to the end and decode it as UTF-8.
fn read_piped_text<R: Read>(mut reader: R) -> Result<String, TtsError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| TtsError::PromptFailed {
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|e| TtsError::PromptFailed {
        message: format!("stdin is not valid UTF-8: {e}"),
    })
}
