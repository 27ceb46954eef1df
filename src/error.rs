//! Error types for section string extraction.
//!
//! The scanning core never fails; these errors surface from the section layer
//! (an image that cannot be opened or parsed, a section that cannot be read)
//! and from report serialization.

use crate::io::error::IoError;
use thiserror::Error;

/// Main error type for secstrings operations.
#[derive(Debug, Error)]
pub enum SecStringsError {
    /// The image could not be parsed as a supported binary format
    #[error("Invalid binary format: {0}")]
    InvalidFormat(String),

    /// A requested section is absent or unreadable
    #[error("Section {section} unavailable: {reason}")]
    SectionUnavailable { section: String, reason: String },

    /// File access errors
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Report serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SecStringsError {
    pub(crate) fn unavailable(section: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SectionUnavailable {
            section: section.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for secstrings operations
pub type Result<T> = std::result::Result<T, SecStringsError>;
