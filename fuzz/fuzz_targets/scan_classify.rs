#![no_main]
use libfuzzer_sys::fuzz_target;
use secstrings::{extract_strings, MemorySections, SectionKind};

fuzz_target!(|data: &[u8]| {
    let src = MemorySections::new()
        .with_section(SectionKind::Text, 0x1000, data.to_vec())
        .with_section(SectionKind::RoData, 0x2000, data.to_vec());
    let report = extract_strings(&src, 4);
    assert_eq!(report.count, report.strings.len());
    for pair in report.strings.windows(2) {
        assert!(pair[0].address <= pair[1].address);
    }
});
