//! Number literals.
//!
//! Scanning is permissive: the maximal run of `0-9 . - + e E` is taken as
//! the literal. The span is then checked against the RFC 8259 number grammar
//! before `f64` conversion, so spans like `1.2.3` or `--` are rejected here
//! rather than by whatever the float parser happens to accept.

use crate::error::{ErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn parse_number(&mut self) -> Result<f64> {
        let start = self.pos;
        let rest = &self.bytes[start..];

        if rest.first() == Some(&b'0') && rest.get(1).is_some_and(u8::is_ascii_digit) {
            return Err(self.error(ErrorKind::LeadingZero));
        }

        let len = rest
            .iter()
            .take_while(|&&b| matches!(b, b'0'..=b'9' | b'.' | b'-' | b'+' | b'e' | b'E'))
            .count();
        if len == 0 {
            return Err(self.error(ErrorKind::InvalidNumber));
        }

        let span = &self.input[start..start + len];
        check_grammar(span.as_bytes()).map_err(|kind| self.error_at(start, kind))?;

        let n: f64 = span
            .parse()
            .map_err(|_| self.error_at(start, ErrorKind::InvalidNumber))?;
        if !n.is_finite() {
            return Err(self.error_at(start, ErrorKind::NumberOutOfRange));
        }

        self.pos += len;
        Ok(n)
    }
}

/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` over the whole span.
fn check_grammar(span: &[u8]) -> std::result::Result<(), ErrorKind> {
    let mut i = 0;
    if span.first() == Some(&b'-') {
        i += 1;
    }

    match span.get(i) {
        Some(b'0') => {
            i += 1;
            if span.get(i).is_some_and(u8::is_ascii_digit) {
                return Err(ErrorKind::LeadingZero);
            }
        }
        Some(b'1'..=b'9') => i += digits(&span[i..]),
        _ => return Err(ErrorKind::InvalidNumber),
    }

    if span.get(i) == Some(&b'.') {
        i += 1;
        let frac = digits(&span[i..]);
        if frac == 0 {
            return Err(ErrorKind::InvalidNumber);
        }
        i += frac;
    }

    if let Some(b'e' | b'E') = span.get(i) {
        i += 1;
        if let Some(b'+' | b'-') = span.get(i) {
            i += 1;
        }
        let exp = digits(&span[i..]);
        if exp == 0 {
            return Err(ErrorKind::InvalidNumber);
        }
        i += exp;
    }

    if i == span.len() {
        Ok(())
    } else {
        Err(ErrorKind::InvalidNumber)
    }
}

fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_accepts_canonical_forms() {
        for ok in ["0", "-0", "12", "-3.25", "0.5", "1e5", "1E+5", "2.5e-3", "-0.0e0"] {
            assert_eq!(check_grammar(ok.as_bytes()), Ok(()), "{ok}");
        }
    }

    #[test]
    fn grammar_rejects_malformed_spans() {
        for bad in ["-", "--", "+1", "1.", ".5", "1.2.3", "1e", "1e+", "1-2", "-e5", "1..2"] {
            assert_eq!(
                check_grammar(bad.as_bytes()),
                Err(ErrorKind::InvalidNumber),
                "{bad}"
            );
        }
    }

    #[test]
    fn grammar_reports_signed_leading_zero() {
        assert_eq!(check_grammar(b"-01"), Err(ErrorKind::LeadingZero));
    }
}
