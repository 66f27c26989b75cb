//! Immutable JSON source text and offset → line/column mapping.
//!
//! A [`SourceText`] owns the complete input and an index of line-start
//! offsets computed once at construction. Tokens and errors only store an
//! absolute character offset; their [`Position`] is derived on demand so it
//! can never disagree with the text.
//!
//! Line terminators are `\n`, `\r\n` and a lone `\r`. Each ends exactly one
//! line. Columns count characters, not bytes or display width.
use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{
    Scanner,
    error::LexError,
    token::Token,
};

/// A 1-based line/column pair together with the absolute offset it was
/// derived from.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based character offset into the source text.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number, counted in characters.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The full text of one JSON document.
///
/// # Examples
///
/// ```rust
/// use jsonscan::SourceText;
///
/// let text = SourceText::new("{\n  \"a\": true\n}");
/// let pos = text.position(4).unwrap();
/// assert_eq!((pos.line, pos.column), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    name: Option<String>,
    text: String,
    /// Character offset of the first character of every line. Always starts
    /// with `0`.
    line_starts: Vec<usize>,
    /// Length of `text` in characters.
    char_len: usize,
}

impl SourceText {
    /// Wraps `text` without a diagnostic name.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let (line_starts, char_len) = index_lines(&text);
        Self {
            name: None,
            text,
            line_starts,
            char_len,
        }
    }

    /// Wraps `text` and remembers `name` (typically a file path) for
    /// diagnostics.
    pub fn with_name(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(text)
        }
    }

    /// The diagnostic name given to [`SourceText::with_name`], if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The complete source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Returns `true` if the text contains no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Number of lines. An empty text has one (empty) line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Maps a character offset to its line and column.
    ///
    /// `offset == self.len()` is valid and names the position just after the
    /// last character. Returns `None` for anything beyond that.
    #[must_use]
    pub fn position(&self, offset: usize) -> Option<Position> {
        (offset <= self.char_len).then(|| self.locate(offset))
    }

    /// Like [`SourceText::position`], but clamps out-of-range offsets to the
    /// end of the text.
    pub(crate) fn locate(&self, offset: usize) -> Position {
        let offset = offset.min(self.char_len);
        // `line_starts[0] == 0`, so the partition point is at least 1.
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let column = offset - self.line_starts[line - 1] + 1;
        Position {
            offset,
            line,
            column,
        }
    }

    /// The text of a 1-based `line`, without its terminator.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let rest: &str = {
            let byte = self
                .text
                .char_indices()
                .nth(start)
                .map_or(self.text.len(), |(b, _)| b);
            &self.text[byte..]
        };
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        Some(&rest[..end])
    }

    /// Scans the whole text into a token list.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered; no tokens are returned in
    /// that case.
    pub fn tokens(&self) -> Result<Vec<Token<'_>>, LexError<'_>> {
        Scanner::new(self).collect()
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

fn index_lines(text: &str) -> (Vec<usize>, usize) {
    let mut line_starts = alloc::vec![0];
    let mut chars = text.chars().peekable();
    let mut offset = 0;
    while let Some(ch) = chars.next() {
        offset += 1;
        match ch {
            '\n' => line_starts.push(offset),
            '\r' if chars.peek() != Some(&'\n') => line_starts.push(offset),
            _ => {}
        }
    }
    (line_starts, offset)
}
