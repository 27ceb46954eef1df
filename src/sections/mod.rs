//! Section access for the string extractor.
//!
//! The extractor never parses binary formats itself. It asks a
//! [`SectionSource`] for the base address and raw bytes of each
//! [`SectionKind`]; any error or empty buffer means "this image has no such
//! section" and the section is skipped.

mod image;

pub use image::ObjectSections;

use crate::core::SectionKind;
use crate::error::{Result, SecStringsError};

/// Raw bytes of one section and the address its first byte is loaded at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionData<'a> {
    pub base_address: u64,
    pub bytes: &'a [u8],
}

impl<'a> SectionData<'a> {
    pub fn new(base_address: u64, bytes: &'a [u8]) -> Self {
        Self {
            base_address,
            bytes,
        }
    }
}

/// Provider of section buffers, implemented per binary format.
///
/// `Sync` so sections can be scanned on the rayon pool.
pub trait SectionSource: Sync {
    /// Look up a section. Absence and read failures are both reported as `Err`.
    fn section(&self, kind: SectionKind) -> Result<SectionData<'_>>;
}

/// In-memory section table, for tests and for callers that already hold
/// section buffers from their own loader.
#[derive(Debug, Clone, Default)]
pub struct MemorySections {
    entries: Vec<(SectionKind, u64, Vec<u8>)>,
}

impl MemorySections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the buffer for `kind`.
    pub fn with_section(
        mut self,
        kind: SectionKind,
        base_address: u64,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(kind, base_address, bytes);
        self
    }

    pub fn insert(&mut self, kind: SectionKind, base_address: u64, bytes: impl Into<Vec<u8>>) {
        let bytes = bytes.into();
        match self.entries.iter_mut().find(|(k, _, _)| *k == kind) {
            Some(entry) => *entry = (kind, base_address, bytes),
            None => self.entries.push((kind, base_address, bytes)),
        }
    }
}

impl SectionSource for MemorySections {
    fn section(&self, kind: SectionKind) -> Result<SectionData<'_>> {
        self.entries
            .iter()
            .find(|(k, _, _)| *k == kind)
            .map(|(_, base, bytes)| SectionData::new(*base, bytes))
            .ok_or_else(|| SecStringsError::unavailable(kind.label(), "not present"))
    }
}
