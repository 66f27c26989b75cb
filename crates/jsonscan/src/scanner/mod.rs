//! Scanner: turns a [`SourceText`] into [`Token`]s, one at a time.
//!
//! What it does
//! - Skips insignificant whitespace, then dispatches on the first character
//!   of the next token. Every branch is decided by that one character.
//! - Reads through a [`Cursor`] with `peek()`/`advance()`/`unread()`; the
//!   literal and string branches unread the dispatch character and re-read it
//!   so each sub-scanner sees its whole lexeme.
//! - Builds the decoded value of strings in a local buffer; the raw text of
//!   every token is a slice of the source, never a copy.
//!
//! Invariants
//! - End of input is only a non-error outcome between tokens. Running out of
//!   characters inside a string or escape is `UnexpectedEof`.
//! - The first error poisons the scanner: it is returned again by every
//!   later `next_token()` call and ends iteration.
//! - Offsets are character offsets; the cursor tracks the matching byte
//!   offset so token slices are O(1).
use alloc::string::String;
use core::iter::FusedIterator;

use crate::{
    error::{LexError, LexErrorKind},
    escape_buffer::{Joined, SurrogateJoiner, UnicodeEscapeBuffer},
    literal_buffer::{ExpectedLiteralBuffer, Step},
    options::{LoneSurrogateMode, ScannerOptions},
    source::SourceText,
    token::{Token, TokenValue},
};


/// A position in the source, as both a character and a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mark {
    offset: usize,
    byte: usize,
}

/// One-character-lookahead reader over an in-memory string.
#[derive(Debug, Clone)]
struct Cursor<'src> {
    input: &'src str,
    offset: usize,
    byte: usize,
    /// The character most recently returned by `advance`, for `unread`.
    last: Option<char>,
}

impl<'src> Cursor<'src> {
    fn new(input: &'src str) -> Self {
        Self {
            input,
            offset: 0,
            byte: 0,
            last: None,
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            byte: self.byte,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.byte..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += 1;
        self.byte += c.len_utf8();
        self.last = Some(c);
        Some(c)
    }

    /// Steps back over the last advanced character. Only one level of
    /// pushback is kept.
    fn unread(&mut self) {
        if let Some(c) = self.last.take() {
            self.offset -= 1;
            self.byte -= c.len_utf8();
        }
    }

    fn since(&self, start: Mark) -> &'src str {
        &self.input[start.byte..self.byte]
    }
}

/// Accumulates the decoded value of a string token.
struct StringValue {
    value: String,
    joiner: SurrogateJoiner,
    /// Offset of the backslash of the high surrogate escape held in `joiner`.
    high_at: usize,
    mode: LoneSurrogateMode,
}

/// An unpaired surrogate: offset of its escape and the code unit.
type LoneSurrogate = (usize, u16);

impl StringValue {
    fn new(mode: LoneSurrogateMode) -> Self {
        Self {
            value: String::new(),
            joiner: SurrogateJoiner::new(),
            high_at: 0,
            mode,
        }
    }

    fn push(&mut self, c: char) -> Result<(), LoneSurrogate> {
        self.flush()?;
        self.value.push(c);
        Ok(())
    }

    fn push_unit(&mut self, unit: u16, at: usize) -> Result<(), LoneSurrogate> {
        match self.joiner.push(unit) {
            Joined::Char(c) => self.value.push(c),
            Joined::Pending => self.high_at = at,
            Joined::Unpaired { lone, next } => {
                self.lone(self.high_at, lone)?;
                match next {
                    Some(c) => self.value.push(c),
                    // The new unit is itself a high surrogate, now held.
                    None => self.high_at = at,
                }
            }
            Joined::LoneLow(unit) => self.lone(at, unit)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LoneSurrogate> {
        match self.joiner.flush() {
            Some(high) => self.lone(self.high_at, high),
            None => Ok(()),
        }
    }

    fn lone(&mut self, at: usize, unit: u16) -> Result<(), LoneSurrogate> {
        match self.mode {
            LoneSurrogateMode::Replace => {
                self.value.push(char::REPLACEMENT_CHARACTER);
                Ok(())
            }
            LoneSurrogateMode::Reject => Err((at, unit)),
        }
    }

    fn finish(mut self) -> Result<String, LoneSurrogate> {
        self.flush()?;
        Ok(self.value)
    }
}

/// A single-pass JSON scanner bound to one [`SourceText`].
///
/// Call [`Scanner::next_token`] until it returns `Ok(None)`, or iterate.
///
/// # Examples
///
/// ```rust
/// use jsonscan::{Scanner, SourceText, TokenKind};
///
/// let text = SourceText::new(r#"{"on": true}"#);
/// let kinds: Vec<TokenKind> = Scanner::new(&text)
///     .map(|token| token.map(|t| t.kind()))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::BeginObject,
///         TokenKind::String,
///         TokenKind::NameSeparator,
///         TokenKind::Boolean,
///         TokenKind::EndObject,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    text: &'src SourceText,
    cursor: Cursor<'src>,
    options: ScannerOptions,
    failed: Option<LexError<'src>>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner with default options.
    #[must_use]
    pub fn new(text: &'src SourceText) -> Self {
        Self::with_options(text, ScannerOptions::default())
    }

    /// Creates a scanner with explicit options.
    #[must_use]
    pub fn with_options(text: &'src SourceText, options: ScannerOptions) -> Self {
        Self {
            text,
            cursor: Cursor::new(text.as_str()),
            options,
            failed: None,
        }
    }

    /// The source text being scanned.
    #[must_use]
    pub fn source_text(&self) -> &'src SourceText {
        self.text
    }

    /// Character offset of the next unread character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset
    }

    /// Reads the next token.
    ///
    /// Returns:
    /// * `Ok(Some(token))` – one token
    /// * `Ok(None)`        – only whitespace remained; scanning is complete
    /// * `Err(err)`        – a lexical error; every later call returns it
    ///   again
    ///
    /// # Errors
    ///
    /// See [`LexErrorKind`] for the failure classes.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, LexError<'src>> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        match self.lex() {
            Ok(token) => {
                if let Some(token) = &token {
                    log::trace!("{:?} at {}", token.kind(), token.offset());
                }
                Ok(token)
            }
            Err(err) => {
                log::debug!("scan aborted at offset {}: {}", err.offset(), err.kind());
                self.failed = Some(err.clone());
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Lexer
    // ------------------------------------------------------------------------------------------------

    fn lex(&mut self) -> Result<Option<Token<'src>>, LexError<'src>> {
        if !self.skip_whitespace() {
            return Ok(None);
        }

        let start = self.cursor.mark();
        let c = self.read_char()?;

        if let Some(value) = TokenValue::structural(c) {
            return Ok(Some(self.token(value, start)));
        }

        match c {
            't' | 'f' | 'n' => {
                self.cursor.unread();
                self.lex_literal(start).map(Some)
            }
            '"' => {
                self.cursor.unread();
                self.lex_string(start).map(Some)
            }
            // Numbers are not scanned; `-` and digits land here too.
            _ => Err(self.error_at(start.offset, LexErrorKind::UnexpectedCharacter(c))),
        }
    }

    /// Skips whitespace. Returns `false` if the input is exhausted.
    fn skip_whitespace(&mut self) -> bool {
        while let Some(c) = self.cursor.peek() {
            if !self.options.is_whitespace(c) {
                return true;
            }
            self.cursor.advance();
        }
        false
    }

    fn read_char(&mut self) -> Result<char, LexError<'src>> {
        match self.cursor.advance() {
            Some(c) => Ok(c),
            None => Err(self.error_at(self.cursor.offset, LexErrorKind::UnexpectedEof)),
        }
    }

    fn lex_literal(&mut self, start: Mark) -> Result<Token<'src>, LexError<'src>> {
        let first = self.read_char()?;
        let Some(mut literal) = ExpectedLiteralBuffer::new(first) else {
            return Err(self.error_at(start.offset, LexErrorKind::UnexpectedCharacter(first)));
        };

        let mut step = literal.step(first);
        loop {
            match step {
                Step::Done(value) => return Ok(self.token(value, start)),
                Step::NeedMore => match self.cursor.advance() {
                    Some(c) => step = literal.step(c),
                    None => break,
                },
                Step::Reject => break,
            }
        }

        let consumed = self.cursor.since(start).into();
        Err(self.error_at(start.offset, LexErrorKind::UnknownLiteral(consumed)))
    }

    fn lex_string(&mut self, start: Mark) -> Result<Token<'src>, LexError<'src>> {
        let quote = self.read_char()?;
        debug_assert_eq!(quote, '"', "string scanning must start at a quote");

        let mut value = StringValue::new(self.options.lone_surrogates);
        loop {
            let at = self.cursor.offset;
            let c = self.read_char()?;
            if c < '\u{20}' {
                return Err(self.error_at(at, LexErrorKind::InvalidControlCharacter(c)));
            }

            match c {
                '"' => break,
                '\\' => self.lex_escape(at, &mut value)?,
                c => value.push(c).map_err(|lone| self.lone_surrogate(lone))?,
            }
        }

        let value = value.finish().map_err(|lone| self.lone_surrogate(lone))?;
        Ok(self.token(TokenValue::String(value), start))
    }

    /// Scans the remainder of an escape sequence whose backslash, at
    /// `backslash_at`, was just consumed.
    fn lex_escape(
        &mut self,
        backslash_at: usize,
        value: &mut StringValue,
    ) -> Result<(), LexError<'src>> {
        let at = self.cursor.offset;
        let c = self.read_char()?;
        let decoded = match c {
            '"' | '\\' | '/' => c,
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                let unit = self.lex_unicode_escape()?;
                return value
                    .push_unit(unit, backslash_at)
                    .map_err(|lone| self.lone_surrogate(lone));
            }
            c if c < '\u{20}' => {
                return Err(self.error_at(at, LexErrorKind::InvalidControlCharacter(c)));
            }
            c => return Err(self.error_at(at, LexErrorKind::InvalidEscapeSequence(c))),
        };
        value.push(decoded).map_err(|lone| self.lone_surrogate(lone))
    }

    /// Reads the four hexadecimal digits following `\u`.
    fn lex_unicode_escape(&mut self) -> Result<u16, LexError<'src>> {
        let mut digits = UnicodeEscapeBuffer::new();
        loop {
            let at = self.cursor.offset;
            let c = self.read_char()?;
            match digits.feed(c) {
                Ok(Some(unit)) => return Ok(unit),
                Ok(None) => {}
                Err(c) => return Err(self.error_at(at, LexErrorKind::InvalidUnicodeEscape(c))),
            }
        }
    }

    fn token(&self, value: TokenValue, start: Mark) -> Token<'src> {
        Token::new(value, self.text, start.offset, start.byte..self.cursor.byte)
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    fn error_at(&self, offset: usize, kind: LexErrorKind) -> LexError<'src> {
        LexError::new(self.text, offset, kind)
    }

    fn lone_surrogate(&self, (at, unit): LoneSurrogate) -> LexError<'src> {
        self.error_at(at, LexErrorKind::LoneSurrogate(unit))
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexError<'src>>;

    /// Yields tokens until end of input, or a single error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed.is_some() {
            return None;
        }
        self.next_token().transpose()
    }
}

impl FusedIterator for Scanner<'_> {}
