use alloc::{format, string::String};
use core::fmt::Write;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{SourceText, TokenValue};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Scans `src` and returns the decoded value if it is exactly one string
/// token.
fn single_string(src: &str) -> Option<(String, String)> {
    let text = SourceText::new(src);
    let mut tokens = text.tokens().ok()?;
    if tokens.len() != 1 {
        return None;
    }
    let token = tokens.pop()?;
    let raw = String::from(token.raw());
    match token.into_value() {
        TokenValue::String(value) => Some((raw, value)),
        _ => None,
    }
}

/// Property: any string, serialized by an independent JSON encoder, scans
/// back to itself, and decoding the token's raw text independently yields
/// the scanned value.
#[test]
fn serialized_strings_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: String) -> bool {
        let src = serde_json::to_string(&value).expect("strings always serialize");
        let Some((raw, scanned)) = single_string(&src) else {
            return false;
        };
        let independent: String = serde_json::from_str(&raw).expect("raw text is valid JSON");
        scanned == value && independent == scanned && raw == src
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: escaping every UTF-16 code unit as `\uXXXX` decodes to the
/// original string, surrogate pairs included.
#[test]
fn fully_escaped_strings_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: String, lowercase: bool) -> bool {
        let mut src = String::from("\"");
        for unit in value.encode_utf16() {
            if lowercase {
                write!(src, "\\u{unit:04x}").expect("writing to a String cannot fail");
            } else {
                write!(src, "\\u{unit:04X}").expect("writing to a String cannot fail");
            }
        }
        src.push('"');
        single_string(&src).is_some_and(|(_, scanned)| scanned == value)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, bool) -> bool);
}

/// Property: a raw control character anywhere in a string is rejected at its
/// own offset.
#[quickcheck]
fn raw_control_characters_are_rejected(prefix: String, control: u8) -> bool {
    let control = char::from(control % 0x20);
    let prefix: String = prefix
        .chars()
        .filter(|c| !matches!(c, '"' | '\\') && *c >= '\u{20}')
        .collect();
    let src = format!("\"{prefix}{control}\"");
    let text = SourceText::new(src.as_str());
    match text.tokens() {
        Err(err) => {
            err.offset() == 1 + prefix.chars().count()
                && *err.kind() == crate::LexErrorKind::InvalidControlCharacter(control)
        }
        Ok(_) => false,
    }
}
