//! Tokens produced by the [`Scanner`](crate::Scanner).
//!
//! A [`Token`] borrows its raw text straight from the [`SourceText`] it was
//! scanned from, so the raw text is always an exact substring of the source.
//! Decoded payloads live in [`TokenValue`].
use alloc::string::String;
use core::{fmt, ops::Range};

use crate::source::{Position, SourceText};

/// The lexical class of a token, without payload.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `:`
    NameSeparator,
    /// `,`
    ValueSeparator,
    /// A string literal.
    String,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
}

impl TokenKind {
    /// The structural token spelled by `c`, if any.
    #[must_use]
    pub fn structural(c: char) -> Option<Self> {
        TokenValue::structural(c).map(|value| value.kind())
    }
}

/// A token kind together with its decoded payload.
///
/// # Examples
///
/// ```rust
/// use jsonscan::{TokenKind, TokenValue};
///
/// let value = TokenValue::String("a\nb".into());
/// assert_eq!(value.kind(), TokenKind::String);
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind", content = "value"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `:`
    NameSeparator,
    /// `,`
    ValueSeparator,
    /// A string literal with all escapes resolved.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
}

impl TokenValue {
    /// The structural token spelled by `c`, if any.
    #[must_use]
    pub fn structural(c: char) -> Option<Self> {
        Some(match c {
            '[' => Self::BeginArray,
            ']' => Self::EndArray,
            '{' => Self::BeginObject,
            '}' => Self::EndObject,
            ':' => Self::NameSeparator,
            ',' => Self::ValueSeparator,
            _ => return None,
        })
    }

    /// The payload-free kind of this value.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::BeginArray => TokenKind::BeginArray,
            Self::EndArray => TokenKind::EndArray,
            Self::BeginObject => TokenKind::BeginObject,
            Self::EndObject => TokenKind::EndObject,
            Self::NameSeparator => TokenKind::NameSeparator,
            Self::ValueSeparator => TokenKind::ValueSeparator,
            Self::String(_) => TokenKind::String,
            Self::Boolean(_) => TokenKind::Boolean,
            Self::Null => TokenKind::Null,
        }
    }
}

/// One scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    value: TokenValue,
    raw: &'src str,
    offset: usize,
    byte_offset: usize,
    text: &'src SourceText,
}

impl<'src> Token<'src> {
    pub(crate) fn new(
        value: TokenValue,
        text: &'src SourceText,
        offset: usize,
        bytes: Range<usize>,
    ) -> Self {
        Self {
            value,
            raw: &text.as_str()[bytes.clone()],
            offset,
            byte_offset: bytes.start,
            text,
        }
    }

    /// The lexical class of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// The token's decoded value.
    #[must_use]
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Consumes the token, keeping only its value.
    #[must_use]
    pub fn into_value(self) -> TokenValue {
        self.value
    }

    /// The exact source text of the token, including quotes and escapes for
    /// strings.
    #[must_use]
    pub fn raw(&self) -> &'src str {
        self.raw
    }

    /// Character offset of the token's first character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte range of [`Token::raw`] within [`SourceText::as_str`].
    #[must_use]
    pub fn byte_span(&self) -> Range<usize> {
        self.byte_offset..self.byte_offset + self.raw.len()
    }

    /// Line and column of the token's first character.
    #[must_use]
    pub fn position(&self) -> Position {
        self.text.locate(self.offset)
    }

    /// The source text this token was scanned from.
    #[must_use]
    pub fn source_text(&self) -> &'src SourceText {
        self.text
    }

    /// The decoded value of a `String` token.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TokenValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value of a `Boolean` token.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            TokenValue::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn structural_kinds() {
        assert_eq!(TokenKind::structural('{'), Some(TokenKind::BeginObject));
        assert_eq!(TokenKind::structural(','), Some(TokenKind::ValueSeparator));
        assert_eq!(TokenKind::structural('"'), None);
    }

    #[test]
    fn payload_kinds() {
        assert_eq!(TokenValue::String("x".into()).kind(), TokenKind::String);
        assert_eq!(TokenValue::Boolean(false).kind(), TokenKind::Boolean);
        assert_eq!(TokenValue::Null.kind(), TokenKind::Null);
        assert_eq!(TokenValue::structural('n'), None);
    }

    #[test]
    fn accessors() {
        let text = SourceText::new(" \"\\u00e9\" true");
        let string = Token::new(TokenValue::String("é".into()), &text, 1, 1..9);
        assert_eq!(string.kind(), TokenKind::String);
        assert_eq!(string.raw(), "\"\\u00e9\"");
        assert_eq!(string.as_str(), Some("é"));
        assert_eq!(string.as_bool(), None);
        assert_eq!(string.byte_span(), 1..9);
        assert_eq!(string.to_string(), "\"\\u00e9\"");

        let boolean = Token::new(TokenValue::Boolean(true), &text, 10, 10..14);
        assert_eq!(boolean.as_bool(), Some(true));
        assert_eq!(boolean.position().column, 11);
        assert!(core::ptr::eq(boolean.source_text(), &text));
    }
}
