//! Extracted string and report types.

use crate::error::{Result, SecStringsError};
use serde::{Deserialize, Serialize};

/// A string accepted by the classifier, located by absolute address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractedString {
    /// Decoded text exactly as found; surrounding whitespace is preserved.
    pub value: String,
    /// Section base address plus the offset of the first byte in the section.
    pub address: u64,
    /// Label of the section the text was found in (see `SectionKind::label`).
    pub section: String,
}

impl ExtractedString {
    pub fn new(value: impl Into<String>, address: u64, section: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            address,
            section: section.into(),
        }
    }
}

/// Deduplicated, address-ordered result of one extraction.
///
/// `count` always equals `strings.len()`; it is carried separately because
/// downstream tooling consumes the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub strings: Vec<ExtractedString>,
    pub count: usize,
}

impl ExtractionReport {
    pub fn new(strings: Vec<ExtractedString>) -> Self {
        let count = strings.len();
        Self { strings, count }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over the strings found in one section.
    pub fn in_section<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = &'a ExtractedString> + 'a {
        self.strings.iter().filter(move |s| s.section == section)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SecStringsError::Serialization(e.to_string()))
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SecStringsError::Serialization(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| SecStringsError::Serialization(e.to_string()))
    }
}

impl Default for ExtractionReport {
    fn default() -> Self {
        Self::empty()
    }
}
