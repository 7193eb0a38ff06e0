//! String literals: terminator scan followed by unescaping.

use crate::error::{ErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a string literal with the cursor on its opening quote.
    ///
    /// Scanning first finds the closing quote, treating the byte after every
    /// `\` as escaped. The raw body is then unescaped in a second pass so
    /// errors point at the offending escape, not at the end of the string.
    pub(crate) fn parse_string(&mut self) -> Result<String> {
        let open = self.pos;
        let start = open + 1;
        let end = find_closing_quote(self.bytes, start)
            .ok_or_else(|| self.error_at(open, ErrorKind::UnterminatedString))?;
        let value = self.unescape(start, end)?;
        self.pos = end + 1;
        Ok(value)
    }

    /// Decode the raw body `input[start..end]`. Runs of plain text are copied
    /// as slices; `start` is used to report absolute offsets.
    fn unescape(&self, start: usize, end: usize) -> Result<String> {
        let raw = &self.input[start..end];
        let bytes = raw.as_bytes();
        let allow_control = self.options.allow_control_characters;

        let mut out = String::with_capacity(raw.len());
        let mut run_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b < 0x20 && !allow_control {
                return Err(self.error_at(start + i, ErrorKind::ControlCharacter(char::from(b))));
            }
            if b != b'\\' {
                i += 1;
                continue;
            }

            out.push_str(&raw[run_start..i]);
            let escaped = match bytes.get(i + 1) {
                Some(b'"') => '"',
                Some(b'\\') => '\\',
                Some(b'/') => '/',
                Some(b'b') => '\u{8}',
                Some(b'f') => '\u{c}',
                Some(b'n') => '\n',
                Some(b'r') => '\r',
                Some(b't') => '\t',
                Some(b'u') => {
                    let (c, len) = self.decode_unicode_escape(bytes, i, start)?;
                    out.push(c);
                    i += len;
                    run_start = i;
                    continue;
                }
                _ => return Err(self.error_at(start + i, ErrorKind::InvalidEscape)),
            };
            out.push(escaped);
            i += 2;
            run_start = i;
        }
        out.push_str(&raw[run_start..]);
        Ok(out)
    }

    /// Decode the `\uXXXX` escape at `bytes[i..]`, joining a following low
    /// surrogate escape when the first unit is a high surrogate. Returns the
    /// character and the number of bytes consumed.
    fn decode_unicode_escape(&self, bytes: &[u8], i: usize, base: usize) -> Result<(char, usize)> {
        let unit = hex4(bytes, i + 2)
            .ok_or_else(|| self.error_at(base + i, ErrorKind::InvalidEscape))?;

        match unit {
            0xD800..=0xDBFF => {
                if bytes.get(i + 6) != Some(&b'\\') || bytes.get(i + 7) != Some(&b'u') {
                    return Err(self.error_at(base + i, ErrorKind::InvalidSurrogate));
                }
                let low = hex4(bytes, i + 8)
                    .ok_or_else(|| self.error_at(base + i + 6, ErrorKind::InvalidEscape))?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error_at(base + i, ErrorKind::InvalidSurrogate));
                }
                let code = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(code)
                    .map(|c| (c, 12))
                    .ok_or_else(|| self.error_at(base + i, ErrorKind::InvalidSurrogate))
            }
            0xDC00..=0xDFFF => Err(self.error_at(base + i, ErrorKind::InvalidSurrogate)),
            _ => char::from_u32(u32::from(unit))
                .map(|c| (c, 6))
                .ok_or_else(|| self.error_at(base + i, ErrorKind::InvalidEscape)),
        }
    }
}

/// Index of the first unescaped `"` at or after `from`. A trailing lone `\`
/// leaves the string unterminated.
fn find_closing_quote(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Exactly four ASCII hex digits at `bytes[at..]`.
fn hex4(bytes: &[u8], at: usize) -> Option<u16> {
    let digits = bytes.get(at..at + 4)?;
    digits.iter().try_fold(0u16, |acc, &b| {
        let digit = char::from(b).to_digit(16)?;
        Some((acc << 4) | digit as u16)
    })
}
