#![no_main]

use arbitrary::Arbitrary;
use jsonscan::{LoneSurrogateMode, Scanner, ScannerOptions, SourceText, TokenValue};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    text: String,
}

fn scan(input: Input) {
    let options = ScannerOptions {
        allow_unicode_whitespace: input.flags & 1 != 0,
        lone_surrogates: if input.flags & 2 != 0 {
            LoneSurrogateMode::Reject
        } else {
            LoneSurrogateMode::Replace
        },
    };
    let text = SourceText::new(input.text);
    let mut previous: Option<usize> = None;

    for result in Scanner::with_options(&text, options) {
        let token = match result {
            Ok(token) => token,
            Err(err) => {
                assert!(err.offset() <= text.len());
                assert!(text.position(err.offset()).is_some());
                return;
            }
        };

        if let Some(previous) = previous {
            assert!(token.offset() > previous, "offsets must strictly increase");
        }
        previous = Some(token.offset());

        assert_eq!(&text.as_str()[token.byte_span()], token.raw());
        assert!(text.position(token.offset()).is_some());

        if let TokenValue::String(value) = token.value() {
            let raw = token.raw();
            assert!(raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"'));
            assert!(!value.chars().any(|c| c < '\u{20}' && !raw.contains('\\')));
            // serde_json refuses lone surrogates; compare whenever it accepts.
            if let Ok(independent) = serde_json::from_str::<String>(raw) {
                assert_eq!(&independent, value);
            }
        }
    }
}

fuzz_target!(|input: Input| scan(input));
