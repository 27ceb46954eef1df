//! Printable run scanners for single-byte ASCII and multi-byte UTF-8 text.
//!
//! Scanners only find maximal decodable runs; deciding whether a run is
//! human text is left to `classify`.

/// A printable run found in a buffer, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRun {
    pub text: String,
    /// Byte offset of the run relative to the start of the scanned buffer.
    pub offset: u64,
}

impl CandidateRun {
    fn new(text: String, offset: usize) -> Self {
        Self {
            text,
            offset: offset as u64,
        }
    }
}

/// Run both scanners over `data`: ASCII runs first, then multi-byte UTF-8 runs.
pub fn scan_candidates(data: &[u8], min_length: usize) -> Vec<CandidateRun> {
    let mut out = scan_ascii(data, min_length);
    out.extend(scan_utf8(data, min_length));
    out
}

#[inline]
fn is_printable_ascii(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}

/// Maximal runs of bytes in `0x20..=0x7e` at least `min_length` bytes long.
pub fn scan_ascii(data: &[u8], min_length: usize) -> Vec<CandidateRun> {
    let mut out = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, &b) in data.iter().enumerate() {
        if is_printable_ascii(b) {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start.take() {
            push_ascii_run(&mut out, data, start, i, min_length);
        }
    }
    if let Some(start) = run_start {
        push_ascii_run(&mut out, data, start, data.len(), min_length);
    }
    out
}

fn push_ascii_run(
    out: &mut Vec<CandidateRun>,
    data: &[u8],
    start: usize,
    end: usize,
    min_length: usize,
) {
    if end - start < min_length {
        return;
    }
    // One byte per char: every byte in the run is printable ASCII.
    let text: String = data[start..end].iter().map(|&b| b as char).collect();
    out.push(CandidateRun::new(text, start));
}

/// Decode one code point at the start of `bytes`.
///
/// Returns `None` for anything that is not a complete, shortest-form,
/// non-surrogate UTF-8 sequence.
#[inline]
fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
    let width = match *bytes.first()? {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return None,
    };
    let s = std::str::from_utf8(bytes.get(..width)?).ok()?;
    s.chars().next().map(|c| (c, width))
}

/// Runs of valid UTF-8 that contain at least one multi-byte code point.
///
/// A run ends at an invalid byte or any control character (newline, tab and
/// carriage return included). Pure-ASCII runs are left to [`scan_ascii`].
/// `min_length` counts code points.
pub fn scan_utf8(data: &[u8], min_length: usize) -> Vec<CandidateRun> {
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < data.len() {
        let Some((_, first_width)) = decode_char(&data[i..]) else {
            // resync one byte at a time
            i += 1;
            continue;
        };

        let mut j = i;
        let mut chars = 0usize;
        let mut multibyte = false;
        while let Some((c, width)) = decode_char(&data[j..]) {
            if c.is_control() {
                break;
            }
            chars += 1;
            multibyte |= width > 1;
            j += width;
        }

        if chars >= min_length && multibyte {
            // Every code point in i..j decoded above, so this cannot fail.
            if let Ok(text) = std::str::from_utf8(&data[i..j]) {
                out.push(CandidateRun::new(text.to_string(), i));
            }
        }

        // The terminating byte is consumed, not rescanned as a run start.
        i = if j == i { i + first_width } else { j + 1 };
    }
    out
}
