//! Low-noise string extraction from executable image sections.
//!
//! `secstrings` finds printable ASCII and UTF-8 text in the code, read-only
//! data and relocated read-only data sections of an image, discards runs that
//! look like disassembly, hex dumps or padding, and reports the survivors by
//! section and absolute address.
//!
//! ```no_run
//! use secstrings::{extract_strings_from_path, ExtractConfig, IOLimits};
//!
//! let cfg = ExtractConfig::default();
//! let report = extract_strings_from_path("/bin/ls", &cfg, &IOLimits::default())?;
//! for s in &report.strings {
//!     println!("{:#x} {} {}", s.address, s.section, s.value);
//! }
//! # Ok::<(), secstrings::SecStringsError>(())
//! ```

/// Core data types module
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod sections;
pub mod strings;

pub use crate::core::{ExtractedString, ExtractionReport, SectionKind};
pub use crate::error::{Result, SecStringsError};
pub use crate::io::IOLimits;
pub use crate::sections::{MemorySections, ObjectSections, SectionData, SectionSource};
pub use crate::strings::{
    extract_strings, extract_strings_from_bytes, extract_strings_from_path,
    extract_strings_with_config, ExtractConfig,
};
