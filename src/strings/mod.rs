//! Section string extraction.
//!
//! For each configured section the extractor asks a [`SectionSource`] for
//! its bytes, scans them for ASCII and multi-byte UTF-8 runs, keeps the runs
//! the classifier accepts, and rebases their offsets onto the section's load
//! address. Results from all sections are then deduplicated and sorted into a
//! single [`ExtractionReport`].

pub mod classify;
mod config;
pub mod finalize;
pub mod scan;

pub use classify::{is_likely_string, looks_like_assembly};
pub use config::ExtractConfig;
pub use finalize::finalize;
pub use scan::{scan_ascii, scan_candidates, scan_utf8, CandidateRun};

use crate::core::{ExtractedString, ExtractionReport, SectionKind};
use crate::error::Result;
use crate::io::{IOLimits, SafeReader};
use crate::sections::{ObjectSections, SectionSource};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, info_span, trace};

/// Extract strings from every known section with default settings and the
/// given minimum run length.
pub fn extract_strings<S: SectionSource + ?Sized>(
    source: &S,
    min_length: usize,
) -> ExtractionReport {
    extract_strings_with_config(source, &ExtractConfig::with_min_length(min_length))
}

/// Extract strings from the sections named in `cfg`.
///
/// Never fails: sections the source cannot provide contribute nothing.
pub fn extract_strings_with_config<S: SectionSource + ?Sized>(
    source: &S,
    cfg: &ExtractConfig,
) -> ExtractionReport {
    let span = info_span!("extract_strings", min_length = cfg.min_length);
    let _guard = span.enter();

    let kinds = cfg.ordered_sections();
    // collect() on an indexed parallel iterator preserves section order
    let per_section: Vec<Vec<ExtractedString>> = if cfg.parallel && kinds.len() > 1 {
        kinds
            .par_iter()
            .map(|&kind| extract_section(source, kind, cfg))
            .collect()
    } else {
        kinds
            .iter()
            .map(|&kind| extract_section(source, kind, cfg))
            .collect()
    };

    let report = finalize(per_section.into_iter().flatten().collect());
    info!(count = report.count, sections = kinds.len(), "String extraction complete");
    report
}

/// Parse an in-memory image and extract its strings.
pub fn extract_strings_from_bytes(data: &[u8], cfg: &ExtractConfig) -> Result<ExtractionReport> {
    let sections = ObjectSections::parse(data)?;
    Ok(extract_strings_with_config(&sections, cfg))
}

/// Map an image from disk and extract its strings.
pub fn extract_strings_from_path<P: AsRef<Path>>(
    path: P,
    cfg: &ExtractConfig,
    limits: &IOLimits,
) -> Result<ExtractionReport> {
    let reader = SafeReader::open(path, limits)?;
    debug!(path = %reader.path().display(), size = reader.size(), "Mapped image");
    extract_strings_from_bytes(reader.bytes(), cfg)
}

/// Scan and classify one section, returning accepted strings in discovery order.
fn extract_section<S: SectionSource + ?Sized>(
    source: &S,
    kind: SectionKind,
    cfg: &ExtractConfig,
) -> Vec<ExtractedString> {
    let section = match source.section(kind) {
        Ok(section) if !section.bytes.is_empty() => section,
        Ok(_) => {
            debug!(section = kind.label(), "Section is empty; skipping");
            return Vec::new();
        }
        Err(e) => {
            debug!(section = kind.label(), error = %e, "Section unavailable; skipping");
            return Vec::new();
        }
    };

    let bytes = &section.bytes[..section.bytes.len().min(cfg.max_section_bytes)];
    if bytes.len() < section.bytes.len() {
        debug!(
            section = kind.label(),
            len = section.bytes.len(),
            limit = cfg.max_section_bytes,
            "Section truncated to scan limit"
        );
    }

    let candidates = scan_candidates(bytes, cfg.min_length);
    let candidate_count = candidates.len();
    let mut accepted = Vec::new();
    for run in candidates {
        if !is_likely_string(&run.text) {
            continue;
        }
        let Some(address) = section.base_address.checked_add(run.offset) else {
            trace!(section = kind.label(), offset = run.offset, "Address overflow; dropping run");
            continue;
        };
        accepted.push(ExtractedString::new(run.text, address, kind.label()));
    }

    debug!(
        section = kind.label(),
        base = section.base_address,
        len = bytes.len(),
        candidates = candidate_count,
        accepted = accepted.len(),
        "Scanned section"
    );
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::MemorySections;

    #[test]
    fn end_to_end_ascii_rejects_assembly() {
        let data = b"\x00\x00Hello, world!\x00\x00mov eax, 1\x00\x00";
        let src = MemorySections::new().with_section(SectionKind::Text, 0x401000, data.to_vec());
        let report = extract_strings(&src, 5);
        assert_eq!(report.count, 1);
        assert_eq!(report.strings[0].value, "Hello, world!");
        assert_eq!(report.strings[0].address, 0x401002);
        assert_eq!(report.strings[0].section, ".text");
    }

    #[test]
    fn missing_and_empty_sections_are_skipped() {
        let src = MemorySections::new()
            .with_section(SectionKind::Text, 0x1000, Vec::new())
            .with_section(SectionKind::RoData, 0x2000, b"\0configuration file\0".to_vec());
        let report = extract_strings(&src, 4);
        assert_eq!(report.count, 1);
        assert_eq!(report.strings[0].address, 0x2001);
        assert_eq!(report.strings[0].section, ".rodata");
    }

    #[test]
    fn no_sections_gives_empty_report() {
        let report = extract_strings(&MemorySections::new(), 4);
        assert_eq!(report, ExtractionReport::empty());
    }

    #[test]
    fn only_configured_sections_are_scanned() {
        let src = MemorySections::new()
            .with_section(SectionKind::Text, 0x1000, b"text section words".to_vec())
            .with_section(SectionKind::RoData, 0x2000, b"rodata section words".to_vec());
        let cfg = ExtractConfig {
            sections: vec![SectionKind::RoData],
            ..ExtractConfig::default()
        };
        let report = extract_strings_with_config(&src, &cfg);
        assert_eq!(report.count, 1);
        assert_eq!(report.strings[0].value, "rodata section words");
    }

    #[test]
    fn scan_limit_truncates_section() {
        let src = MemorySections::new()
            .with_section(SectionKind::RoData, 0, b"first words\0second words".to_vec());
        let cfg = ExtractConfig {
            max_section_bytes: 12,
            ..ExtractConfig::default()
        };
        let report = extract_strings_with_config(&src, &cfg);
        let values: Vec<&str> = report.strings.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["first words"]);

        // without an explicit bound the whole section is scanned
        let report = extract_strings(&src, 4);
        let values: Vec<&str> = report.strings.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["first words", "second words"]);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let src = MemorySections::new()
            .with_section(SectionKind::Text, 0x1000, b"\0alpha beta\0gamma delta\0".to_vec())
            .with_section(
                SectionKind::RoData,
                0x1000,
                "\0alpha beta\0αβγδ text\0".as_bytes().to_vec(),
            )
            .with_section(SectionKind::RelRoData, 0x3000, b"relro entry name".to_vec());
        let par = extract_strings_with_config(&src, &ExtractConfig::default());
        let seq = extract_strings_with_config(
            &src,
            &ExtractConfig {
                parallel: false,
                ..ExtractConfig::default()
            },
        );
        assert_eq!(par, seq);
        // same text at the same address in two sections: both kept, .text first
        assert_eq!(par.strings[0].section, ".text");
        assert_eq!(par.strings[1].section, ".rodata");
        assert_eq!(par.strings[0].address, 0x1001);
    }

    #[test]
    fn address_overflow_drops_run() {
        let src = MemorySections::new().with_section(
            SectionKind::RoData,
            u64::MAX,
            b"\0overflowing text".to_vec(),
        );
        let report = extract_strings(&src, 4);
        assert!(report.is_empty());
    }
}
