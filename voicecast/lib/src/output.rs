//! Persists audio bytes to disk.

use std::path::{Path, PathBuf};

use crate::errors::TtsError;

/// Create `dir` (and any parents) if it does not exist yet.
pub async fn ensure_output_dir(dir: &Path) -> Result<(), TtsError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| TtsError::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })
}

/// Write `audio` verbatim to `dir/filename`, replacing any existing file.
///
/// ## Returns
///
/// The full path that was written.
///
/// ## Errors
///
/// Returns `TtsError::OutputWrite` if the directory or file cannot be written.
pub async fn save_audio(dir: &Path, filename: &str, audio: &[u8]) -> Result<PathBuf, TtsError> {
    ensure_output_dir(dir).await?;

    let path = dir.join(filename);
    tokio::fs::write(&path, audio)
        .await
        .map_err(|source| TtsError::OutputWrite {
            path: path.clone(),
            source,
        })?;

    tracing::info!(path = %path.display(), bytes = audio.len(), "Audio saved");

    Ok(path)
}
