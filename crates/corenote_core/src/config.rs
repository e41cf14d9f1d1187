//! Note store limits.
//!
//! # Invariants
//! - Every limit is strictly positive after `validate()`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum note length accepted by the quick-note input.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 180;
/// Card preview length used by list rendering.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Invalid store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A limit was set to zero.
    ZeroLimit(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLimit(field) => write!(f, "config `{field}` must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}

/// Tunables for [`crate::NoteStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteStoreConfig {
    /// Text longer than this is truncated on add/edit.
    pub max_text_chars: usize,
    /// Characters kept by [`crate::derive_preview`] for list cards.
    pub preview_chars: usize,
}

impl Default for NoteStoreConfig {
    fn default() -> Self {
        Self {
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl NoteStoreConfig {
    /// Returns a copy with `max_text_chars` replaced.
    pub fn with_max_text_chars(mut self, max_text_chars: usize) -> Self {
        self.max_text_chars = max_text_chars;
        self
    }

    /// Checks that every limit is usable.
    ///
    /// # Errors
    /// - Returns [`ConfigError::ZeroLimit`] naming the first zero field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_text_chars == 0 {
            return Err(ConfigError::ZeroLimit("max_text_chars"));
        }
        if self.preview_chars == 0 {
            return Err(ConfigError::ZeroLimit("preview_chars"));
        }
        Ok(())
    }
}
