//! Configuration for section string extraction.

use crate::core::SectionKind;

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Minimum run length, in characters (bytes for ASCII, code points for UTF-8)
    pub min_length: usize,
    /// Sections to scan; normalised to declared order before scanning
    pub sections: Vec<SectionKind>,
    /// Scan sections concurrently on the rayon pool
    pub parallel: bool,
    /// Optional scan bound; section buffers longer than this are truncated.
    /// Unbounded by default.
    pub max_section_bytes: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            sections: SectionKind::ALL.to_vec(),
            parallel: true,
            max_section_bytes: usize::MAX,
        }
    }
}

impl ExtractConfig {
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            min_length,
            ..Self::default()
        }
    }

    /// Requested sections in declared order without repeats, so the order a
    /// caller lists them in never changes the report.
    pub(crate) fn ordered_sections(&self) -> Vec<SectionKind> {
        let mut kinds = self.sections.clone();
        kinds.sort();
        kinds.dedup();
        kinds
    }
}
