use crate::token::TokenValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteralValue {
    Null,
    True,
    False,
}

impl ExpectedLiteralValue {
    fn spelling(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
        }
    }

    fn token(self) -> TokenValue {
        match self {
            Self::Null => TokenValue::Null,
            Self::True => TokenValue::Boolean(true),
            Self::False => TokenValue::Boolean(false),
        }
    }
}

/// What happened after feeding one more character into the literal matcher?
#[derive(Debug, PartialEq)]
pub(crate) enum Step {
    /// Character matched, but the literal is not finished yet.
    NeedMore,
    /// Character matched *and* it was the last one of the literal.
    Done(TokenValue),
    /// Character did **not** match the expected one.
    Reject,
}

/// Matches one of the fixed literals `true`, `false` and `null` character by
/// character, starting from the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpectedLiteralBuffer {
    remaining: &'static [u8],
    kind: ExpectedLiteralValue,
}

impl ExpectedLiteralBuffer {
    /// Starts a matcher for the literal beginning with `first`, or `None` if
    /// no literal begins with it.
    pub(crate) fn new(first: char) -> Option<Self> {
        let kind = match first {
            'n' => ExpectedLiteralValue::Null,
            't' => ExpectedLiteralValue::True,
            'f' => ExpectedLiteralValue::False,
            _ => return None,
        };
        Some(Self {
            remaining: kind.spelling().as_bytes(),
            kind,
        })
    }

    /// Give the matcher the next input character and learn what to do next.
    pub(crate) fn step(&mut self, c: char) -> Step {
        let Some((&expected, rest)) = self.remaining.split_first() else {
            return Step::Reject;
        };

        if char::from(expected) != c {
            return Step::Reject;
        }

        self.remaining = rest;
        if rest.is_empty() {
            Step::Done(self.kind.token())
        } else {
            Step::NeedMore
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Option<Step> {
        let mut chars = input.chars();
        let mut buf = ExpectedLiteralBuffer::new(chars.clone().next()?)?;
        let mut last = None;
        for c in chars.by_ref() {
            let step = buf.step(c);
            let stop = step != Step::NeedMore;
            last = Some(step);
            if stop {
                break;
            }
        }
        last
    }

    #[test]
    fn matches_literals() {
        assert_eq!(run("true"), Some(Step::Done(TokenValue::Boolean(true))));
        assert_eq!(run("false"), Some(Step::Done(TokenValue::Boolean(false))));
        assert_eq!(run("null"), Some(Step::Done(TokenValue::Null)));
    }

    #[test]
    fn rejects_mismatch() {
        assert_eq!(run("nul!"), Some(Step::Reject));
        assert_eq!(run("tx"), Some(Step::Reject));
    }

    #[test]
    fn incomplete_needs_more() {
        assert_eq!(run("fals"), Some(Step::NeedMore));
    }

    #[test]
    fn only_literal_starts() {
        assert!(ExpectedLiteralBuffer::new('x').is_none());
        assert_eq!(
            ExpectedLiteralBuffer::new('f').map(|b| b.kind),
            Some(ExpectedLiteralValue::False)
        );
    }

    #[test]
    fn finished_matcher_rejects() {
        let mut buf = ExpectedLiteralBuffer::new('n').unwrap();
        for c in "null".chars() {
            buf.step(c);
        }
        assert_eq!(buf.step('l'), Step::Reject);
    }
}
