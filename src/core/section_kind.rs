//! Logical section labels used to group and report extracted strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of image sections scanned for embedded text.
///
/// Variants are declared in scan order; `Ord` follows that order so a
/// requested set of sections can be normalised before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    /// Executable code.
    #[serde(rename = ".text")]
    Text,
    /// Read-only data.
    #[serde(rename = ".rodata")]
    RoData,
    /// Read-only data that is written once by the dynamic loader.
    #[serde(rename = ".data.rel.ro")]
    RelRoData,
}

impl SectionKind {
    /// All kinds in declared scan order.
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Text,
        SectionKind::RoData,
        SectionKind::RelRoData,
    ];

    /// Report label for this kind, independent of the host binary format.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Text => ".text",
            SectionKind::RoData => ".rodata",
            SectionKind::RelRoData => ".data.rel.ro",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
