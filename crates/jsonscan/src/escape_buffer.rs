//! Decoding of `\uXXXX` escapes.
//!
//! [`UnicodeEscapeBuffer`] collects the four hexadecimal digits of one escape
//! and yields the UTF-16 code unit they spell. [`SurrogateJoiner`] then turns
//! a stream of code units into `char`s, pairing a high surrogate with the low
//! surrogate of an immediately following escape.

/// Accumulates up to four ASCII hexadecimal digits (`0-9`, `A-F`, `a-f`).
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    value: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feeds one digit.
    ///
    /// - `Ok(None)` while fewer than four digits have been seen.
    /// - `Ok(Some(unit))` on the fourth digit; the buffer is reset.
    /// - `Err(c)` if `c` is not a hexadecimal digit.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<u16>, char> {
        let digit = c.to_digit(16).ok_or(c)?;
        // `digit < 16`, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation)]
        let digit = digit as u16;
        self.value = (self.value << 4) | digit;
        self.len += 1;

        if self.len == 4 {
            let unit = self.value;
            *self = Self::default();
            Ok(Some(unit))
        } else {
            Ok(None)
        }
    }
}

/// Result of pushing one code unit into a [`SurrogateJoiner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Joined {
    /// A complete character.
    Char(char),
    /// A high surrogate is being held until the next unit arrives.
    Pending,
    /// The held high surrogate could not be paired. `next` is what the new
    /// unit produced on its own.
    Unpaired { lone: u16, next: Option<char> },
    /// The new unit is a low surrogate with no preceding high surrogate.
    LoneLow(u16),
}

/// Pairs UTF-16 surrogates across consecutive `\u` escapes.
#[derive(Debug, Default)]
pub(crate) struct SurrogateJoiner {
    high: Option<u16>,
}

impl SurrogateJoiner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, unit: u16) -> Joined {
        match (self.high.take(), unit) {
            (Some(high), 0xDC00..=0xDFFF) => {
                let code =
                    0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
                // Every pairing of a high and a low surrogate is a valid
                // supplementary scalar value.
                char::from_u32(code)
                    .map_or(Joined::Unpaired { lone: high, next: None }, Joined::Char)
            }
            (Some(high), _) => {
                let next = match self.push(unit) {
                    Joined::Char(c) => Some(c),
                    _ => None,
                };
                Joined::Unpaired { lone: high, next }
            }
            (None, 0xD800..=0xDBFF) => {
                self.high = Some(unit);
                Joined::Pending
            }
            (None, 0xDC00..=0xDFFF) => Joined::LoneLow(unit),
            (None, _) => {
                char::from_u32(u32::from(unit)).map_or(Joined::LoneLow(unit), Joined::Char)
            }
        }
    }

    /// Takes a held high surrogate when anything other than a `\u` escape
    /// follows it.
    pub(crate) fn flush(&mut self) -> Option<u16> {
        self.high.take()
    }
}
