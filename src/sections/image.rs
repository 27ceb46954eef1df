//! `object`-backed section lookup for ELF, PE/COFF and Mach-O images.

use super::{SectionData, SectionSource};
use crate::core::SectionKind;
use crate::error::{Result, SecStringsError};
use object::read::{Object, ObjectSection};
use object::BinaryFormat;
use tracing::{debug, trace};

/// Optional segment name and section name.
type Candidate = (Option<&'static str>, &'static str);

/// Sections of a parsed executable image, borrowed from the input bytes.
pub struct ObjectSections<'data> {
    file: object::File<'data>,
}

impl<'data> ObjectSections<'data> {
    /// Parse an image. This is the only fatal failure point of an extraction.
    pub fn parse(data: &'data [u8]) -> Result<Self> {
        let file =
            object::File::parse(data).map_err(|e| SecStringsError::InvalidFormat(e.to_string()))?;
        debug!(format = ?file.format(), arch = ?file.architecture(), "Parsed image");
        Ok(Self { file })
    }

    pub fn format(&self) -> BinaryFormat {
        self.file.format()
    }

    /// Native `(segment, section)` names for `kind`, tried in order.
    ///
    /// A segment is only given where the section name alone is ambiguous:
    /// Mach-O has a `__const` in both `__TEXT` and `__DATA_CONST`/`__DATA`.
    fn candidate_names(&self, kind: SectionKind) -> &'static [Candidate] {
        match (self.file.format(), kind) {
            (BinaryFormat::Pe | BinaryFormat::Coff, SectionKind::Text) => &[(None, ".text")],
            (BinaryFormat::Pe | BinaryFormat::Coff, SectionKind::RoData) => &[(None, ".rdata")],
            (BinaryFormat::Pe | BinaryFormat::Coff, SectionKind::RelRoData) => &[],
            (BinaryFormat::MachO, SectionKind::Text) => &[(None, "__text")],
            (BinaryFormat::MachO, SectionKind::RoData) => {
                &[(None, "__rodata"), (None, "__cstring")]
            }
            (BinaryFormat::MachO, SectionKind::RelRoData) => {
                &[(Some("__DATA_CONST"), "__const"), (Some("__DATA"), "__const")]
            }
            (_, SectionKind::Text) => &[(None, ".text")],
            (_, SectionKind::RoData) => &[(None, ".rodata")],
            (_, SectionKind::RelRoData) => &[(None, ".data.rel.ro")],
        }
    }

    fn find_section(
        &self,
        segment: Option<&str>,
        name: &str,
    ) -> Option<object::Section<'data, '_>> {
        match segment {
            None => self.file.section_by_name(name),
            Some(segment) => self.file.sections().find(|section| {
                section.name().ok() == Some(name)
                    && section.segment_name().ok().flatten() == Some(segment)
            }),
        }
    }
}

impl SectionSource for ObjectSections<'_> {
    fn section(&self, kind: SectionKind) -> Result<SectionData<'_>> {
        for &(segment, name) in self.candidate_names(kind) {
            let Some(section) = self.find_section(segment, name) else {
                trace!(section = kind.label(), segment, name, "Candidate section not present");
                continue;
            };
            let bytes = section
                .data()
                .map_err(|e| SecStringsError::unavailable(kind.label(), e.to_string()))?;
            return Ok(SectionData::new(section.address(), bytes));
        }
        Err(SecStringsError::unavailable(
            kind.label(),
            format!("no matching section in {:?} image", self.file.format()),
        ))
    }
}
