use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

use crate::source::{Position, SourceText};

/// What went wrong while scanning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// The first character of a token starts no known token.
    #[error("unexpected character '{}'", .0.escape_debug())]
    UnexpectedCharacter(char),
    /// A token starting with `t`, `f` or `n` is not `true`, `false` or
    /// `null`. Holds the characters consumed so far.
    #[error("unknown token starting with '{0}'")]
    UnknownLiteral(String),
    /// The input ended inside a string or escape sequence.
    #[error("reached end of input unexpectedly")]
    UnexpectedEof,
    /// A raw character below U+0020 inside a string.
    #[error("control character U+{:04X} is not allowed in a string", code_point(.0))]
    InvalidControlCharacter(char),
    /// A backslash followed by a character other than `" \ / b f n r t u`.
    #[error("unexpected character '{}' in escape sequence", .0.escape_debug())]
    InvalidEscapeSequence(char),
    /// A `\u` escape with a non-hexadecimal digit in its four-digit window.
    #[error(
        "unicode escape must consist of four characters of [0-9A-Fa-f], found '{}'",
        .0.escape_debug()
    )]
    InvalidUnicodeEscape(char),
    /// A `\u` escape naming an unpaired UTF-16 surrogate, rejected because of
    /// [`LoneSurrogateMode::Reject`](crate::LoneSurrogateMode::Reject).
    #[error("unpaired surrogate \\u{0:04X} in unicode escape")]
    LoneSurrogate(u16),
}

/// A fatal scanning error, located in its [`SourceText`].
///
/// Line and column are not stored; they are resolved through the source
/// text on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError<'src> {
    text: &'src SourceText,
    offset: usize,
    kind: LexErrorKind,
}

impl<'src> LexError<'src> {
    pub(crate) fn new(text: &'src SourceText, offset: usize, kind: LexErrorKind) -> Self {
        Self {
            text,
            offset: offset.min(text.len()),
            kind,
        }
    }

    /// The kind of failure, with its payload.
    #[must_use]
    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    /// Character offset of the offending character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Human-readable description, without location.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The source text the error refers to.
    #[must_use]
    pub fn source_text(&self) -> &'src SourceText {
        self.text
    }

    /// Line and column of [`LexError::offset`].
    #[must_use]
    pub fn position(&self) -> Position {
        self.text.locate(self.offset)
    }

    /// 1-based line of the offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.position().line
    }

    /// 1-based column of the offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.position().column
    }
}

impl fmt::Display for LexError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.text.name() {
            write!(f, "{name}:")?;
        }
        write!(f, "{}: {}", self.position(), self.kind)
    }
}

impl core::error::Error for LexError<'_> {}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}
