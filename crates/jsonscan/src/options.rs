/// Configuration options for the [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use jsonscan::{LoneSurrogateMode, Scanner, ScannerOptions, SourceText};
///
/// let text = SourceText::new("\u{00A0}null");
/// let options = ScannerOptions {
///     allow_unicode_whitespace: true,
///     lone_surrogates: LoneSurrogateMode::Reject,
/// };
/// let mut scanner = Scanner::with_options(&text, options);
/// assert!(scanner.next_token().unwrap().is_some());
/// ```
///
/// # Default
///
/// Only RFC 8259 whitespace is skipped and lone surrogates are replaced.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Whether to skip any Unicode whitespace between tokens.
    ///
    /// By default, the scanner only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// Line numbers are unaffected: only `\n`, `\r` and `\r\n` end a line.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// What to do with a `\uXXXX` escape that names an unpaired UTF-16
    /// surrogate.
    ///
    /// # Default
    ///
    /// [`LoneSurrogateMode::Replace`]
    pub lone_surrogates: LoneSurrogateMode,
}

/// Handling of `\uXXXX` escapes that decode to an unpaired surrogate.
///
/// A high surrogate escape immediately followed by a low surrogate escape is
/// always combined into one character; this only concerns the leftovers.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoneSurrogateMode {
    /// Substitute U+FFFD REPLACEMENT CHARACTER.
    #[default]
    Replace,
    /// Fail with [`LexErrorKind::LoneSurrogate`](crate::LexErrorKind::LoneSurrogate).
    Reject,
}

impl ScannerOptions {
    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r') || (self.allow_unicode_whitespace && c.is_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc_whitespace_only_by_default() {
        let options = ScannerOptions::default();
        for c in [' ', '\t', '\n', '\r'] {
            assert!(options.is_whitespace(c));
        }
        assert!(!options.is_whitespace('\u{00A0}'));
        assert!(!options.is_whitespace('\u{000B}'));
        assert_eq!(options.lone_surrogates, LoneSurrogateMode::Replace);
    }

    #[test]
    fn unicode_whitespace_when_allowed() {
        let options = ScannerOptions {
            allow_unicode_whitespace: true,
            ..Default::default()
        };
        assert!(options.is_whitespace('\u{00A0}'));
        assert!(options.is_whitespace('\u{2028}'));
        assert!(!options.is_whitespace('x'));
    }
}
