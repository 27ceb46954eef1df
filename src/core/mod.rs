//! Core data types shared by the scanners, the section layer and callers.

pub mod extracted;
pub mod section_kind;

pub use extracted::{ExtractedString, ExtractionReport};
pub use section_kind::SectionKind;
