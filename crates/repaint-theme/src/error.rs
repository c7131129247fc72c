//! Error types for theme document loading.

use std::str::Utf8Error;

/// A theme document could not be loaded at all.
///
/// These are fatal for the one document being converted, never for a batch:
/// callers converting many themes report the failure and move on. Malformed
/// *individual* color entries are not errors — they are skipped during
/// instance construction.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The document bytes are not valid UTF-8.
    #[error("theme document is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// The document is not valid JSON once comments are removed.
    #[error("theme document is malformed after comment removal: {0}")]
    Document(#[from] serde_json::Error),
}
