//! Heuristic filter separating human-readable text from printable noise.
//!
//! Printable-run scanners over code and data sections surface plenty of
//! false positives: instruction bytes that happen to decode as letters,
//! padding, hex tables. A run is kept only if it passes every check in
//! [`is_likely_string`].

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Mnemonics whose presence marks a run as disassembly-like.
const ASM_MNEMONICS: &[&str] = &[
    "mov", "jmp", "call", "ret", "lea", "add", "sub", "xor", "push", "pop", "cmp", "test",
];

/// `<mnemonic> ` patterns, i.e. a mnemonic followed by an operand separator.
static MNEMONIC_WITH_OPERAND: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(ASM_MNEMONICS.iter().map(|m| format!("{m} ")))
        .expect("valid mnemonic patterns")
});

/// Minimum share (percent) of letters, digits, spaces and common punctuation.
const MIN_TEXT_PERCENT: usize = 70;

/// Hex-digit share (percent) above which a run is treated as a hex dump.
const MAX_HEX_PERCENT: usize = 80;

#[inline]
fn is_common_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ':' | ';' | '!' | '?' | '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}'
            | '-' | '_' | '/' | '\\' | '+' | '=' | '*' | '&' | '|' | '<' | '>' | '@' | '#'
            | '$' | '%' | '^' | '~' | '`'
    )
}

/// Letter (any `L*` category) or decimal digit (`Nd`).
#[inline]
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

#[inline]
fn is_text_char(c: char) -> bool {
    is_letter_or_digit(c) || c == ' ' || is_common_punctuation(c)
}

/// Three or more copies of one character, e.g. `"aaaa"` or `"===="`.
fn is_repeated_char(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let mut len = 1usize;
    for c in chars {
        if c != first {
            return false;
        }
        len += 1;
    }
    len >= 3
}

/// Decide whether a decoded run looks like human text.
///
/// Checks run on the whitespace-trimmed text:
/// 1. non-empty;
/// 2. not a single repeated character;
/// 3. at least 70% letters, digits, spaces or common punctuation
///    (integer percentage, so exactly 70% passes);
/// 4. not [`looks_like_assembly`].
pub fn is_likely_string(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || is_repeated_char(trimmed) {
        return false;
    }

    let (mut good, mut total) = (0usize, 0usize);
    for c in trimmed.chars() {
        total += 1;
        if is_text_char(c) {
            good += 1;
        }
    }
    if good * 100 / total < MIN_TEXT_PERCENT {
        return false;
    }

    !looks_like_assembly(trimmed)
}

/// Disassembly and hex-dump detector.
///
/// Flags text that starts with a mnemonic, contains a mnemonic followed by a
/// space, or is more than 80% hex digits (with `x` counted for `0x`).
pub fn looks_like_assembly(text: &str) -> bool {
    let lower = text.to_lowercase();
    if ASM_MNEMONICS.iter().any(|m| lower.starts_with(m))
        || MNEMONIC_WITH_OPERAND.is_match(&lower)
    {
        return true;
    }

    let (mut hex, mut total) = (0usize, 0usize);
    for c in lower.chars() {
        total += 1;
        if c.is_ascii_hexdigit() || c == 'x' {
            hex += 1;
        }
    }
    total > 0 && hex * 100 / total > MAX_HEX_PERCENT
}
