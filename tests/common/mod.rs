//! Shared helpers for building small images and temporary files.

#![allow(dead_code)]

use object::write::Object;
use object::{Architecture, BinaryFormat, Endianness, SectionKind};
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a relocatable x86-64 object in `format` with the given sections.
///
/// Relocatable objects place every section at address 0, so reported
/// addresses equal section offsets.
pub fn build_image(format: BinaryFormat, sections: &[(&str, SectionKind, &[u8])]) -> Vec<u8> {
    let mut obj = Object::new(format, Architecture::X86_64, Endianness::Little);
    for (name, kind, data) in sections {
        let id = obj.add_section(Vec::new(), name.as_bytes().to_vec(), *kind);
        obj.append_section_data(id, data, 1);
    }
    obj.write().expect("write object image")
}

/// Mach-O object whose sections carry explicit `(segment, section)` names.
pub fn build_macho(sections: &[(&str, &str, SectionKind, &[u8])]) -> Vec<u8> {
    let mut obj = Object::new(BinaryFormat::MachO, Architecture::X86_64, Endianness::Little);
    for (segment, name, kind, data) in sections {
        let id = obj.add_section(segment.as_bytes().to_vec(), name.as_bytes().to_vec(), *kind);
        obj.append_section_data(id, data, 1);
    }
    obj.write().expect("write Mach-O image")
}

pub const SAMPLE_TEXT: &[u8] =
    b"\x55\x48\x89\xe5mov eax, 1\x00\x48\x83\xec\x10\xc3\x90\x90\x90\x90";

pub const SAMPLE_RELRO: &[u8] = b"\x10\x00\x00\x00/etc/sample.conf\x00\x00\x00\x00";

/// `.rodata` with text at offsets 1, 27 and 75, a hex dump, a repeated
/// string and padding.
pub fn sample_rodata() -> Vec<u8> {
    [
        &b"\x00Usage: sample [-v] <file>\x00"[..],
        b"Hello, world!\x00",
        b"\xff\xff\xffdeadbeefcafebabe\x00",
        b"Hello, world!\x00",
        "日本語の文字\0".as_bytes(),
        b"AAAAAAAAAAAA\x00",
    ]
    .concat()
}

/// ELF image with `.text`, `.rodata` and `.data.rel.ro` content typical of a
/// small C program.
pub fn sample_elf() -> Vec<u8> {
    build_image(
        BinaryFormat::Elf,
        &[
            (".text", SectionKind::Text, SAMPLE_TEXT),
            (".rodata", SectionKind::ReadOnlyData, &sample_rodata()),
            (".data.rel.ro", SectionKind::Data, SAMPLE_RELRO),
        ],
    )
}

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// Deterministic pseudo-random bytes, biased towards printable ASCII so runs
/// of every length show up.
pub fn noisy_buffer(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let r = (state >> 33) as u32;
        let b = match r % 10 {
            0..=5 => b' ' + (r >> 8) as u8 % 95,
            6 => 0,
            7 => [0xc3, 0xa9][(r >> 8) as usize % 2],
            _ => (r >> 8) as u8,
        };
        out.push(b);
    }
    out
}
