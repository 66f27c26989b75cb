//! A lexical scanner for JSON text (RFC 8259) that keeps exact source
//! positions.
//!
//! Build a [`SourceText`] from the input, bind a [`Scanner`] to it and pull
//! [`Token`]s until the end-of-input signal. Every token carries its raw
//! source slice and starting offset; line and column are resolved through
//! the source text on demand. Failures are reported as a single [`LexError`]
//! that ends the scan.
//!
//! ```rust
//! use jsonscan::{SourceText, TokenValue};
//!
//! let text = SourceText::new("[\"a\\u0041\", null]");
//! let tokens = text.tokens().unwrap();
//! assert_eq!(tokens[1].value(), &TokenValue::String("aA".into()));
//! assert_eq!(tokens[1].raw(), "\"a\\u0041\"");
//! assert_eq!(tokens[3].position().column, 13);
//! ```
//!
//! Numeric literals are not scanned: a `-` or digit where a token is
//! expected fails with [`LexErrorKind::UnexpectedCharacter`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod escape_buffer;
mod literal_buffer;

mod error;
mod options;
mod scanner;
mod source;
mod token;

#[cfg(test)]
mod tests;

pub use error::{LexError, LexErrorKind};
pub use options::{LoneSurrogateMode, ScannerOptions};
pub use scanner::Scanner;
pub use source::{Position, SourceText};
pub use token::{Token, TokenKind, TokenValue};
