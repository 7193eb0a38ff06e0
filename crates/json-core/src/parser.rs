//! Recursive-descent JSON parser.
//!
//! The parser borrows the whole input and advances an explicit byte cursor.
//! Value dispatch is LL(1) on the next non-whitespace byte:
//!
//! - `{` object, `[` array, `"` string
//! - `t` / `f` boolean, `n` null
//! - anything else is handed to the number scanner
//!
//! String and number scanning live in the `string` and `number` modules
//! as further `impl Parser` blocks.
//!
//! Recursion depth equals container nesting depth and is capped by
//! [`ParseOptions::effective_max_depth`], never more than
//! [`MAX_SUPPORTED_DEPTH`](crate::MAX_SUPPORTED_DEPTH). Adversarial input
//! fails with [`ErrorKind::NestingTooDeep`] instead of exhausting the stack.

use crate::error::{ErrorKind, ParseError, Result};
use crate::options::ParseOptions;
use crate::value::{Map, Value};

/// Parse `input` as a single JSON document with default options.
///
/// Leading and trailing whitespace (space, tab, `\n`, `\r`) is ignored.
/// Anything else after the top-level value is an error.
pub fn parse(input: &str) -> Result<Value> {
    parse_with(input, &ParseOptions::default())
}

/// Parse `input` as a single JSON document with explicit options.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Value> {
    tracing::trace!(len = input.len(), "parsing json");
    let result = Parser::new(input, options).parse_document();
    if let Err(err) = &result {
        tracing::debug!(
            kind = %err.kind,
            line = err.line,
            column = err.column,
            "json parse failed"
        );
    }
    result
}

pub(crate) struct Parser<'a> {
    pub(crate) input: &'a str,
    pub(crate) bytes: &'a [u8],
    pub(crate) pos: usize,
    pub(crate) options: &'a ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            options,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        if self.at_end() {
            return Err(self.error(ErrorKind::EmptyInput));
        }
        let value = self.parse_value()?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.error(ErrorKind::TrailingCharacters));
        }
        Ok(value)
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(self.pos, kind)
    }

    pub(crate) fn error_at(&self, offset: usize, kind: ErrorKind) -> ParseError {
        ParseError::at(self.input, offset, kind)
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Skip whitespace and return the next byte, failing at end of input.
    fn peek_token(&mut self) -> Result<u8> {
        self.skip_whitespace();
        self.peek().ok_or_else(|| self.error(ErrorKind::UnexpectedEof))
    }

    /// Parse one value starting at the next non-whitespace byte.
    fn parse_value(&mut self) -> Result<Value> {
        match self.peek_token()? {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => self.parse_string().map(Value::String),
            b't' => self.parse_literal("true", ErrorKind::InvalidBoolean, Value::Bool(true)),
            b'f' => self.parse_literal("false", ErrorKind::InvalidBoolean, Value::Bool(false)),
            b'n' => self.parse_literal("null", ErrorKind::InvalidNull, Value::Null),
            _ => self.parse_number().map(Value::Number),
        }
    }

    /// Match `literal` exactly at the cursor. No word-boundary check: only
    /// the literal's bytes are consumed and whatever follows is left for the
    /// caller's structural checks.
    fn parse_literal(&mut self, literal: &str, invalid: ErrorKind, value: Value) -> Result<Value> {
        let rest = &self.bytes[self.pos..];
        if rest.starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            return Ok(value);
        }
        if literal.as_bytes().starts_with(rest) {
            return Err(self.error_at(self.bytes.len(), ErrorKind::UnexpectedEof));
        }
        Err(self.error(invalid))
    }

    /// Account for one more level of nesting at the current `{` or `[`.
    fn descend(&mut self) -> Result<()> {
        let limit = self.options.effective_max_depth();
        if self.depth >= limit {
            return Err(self.error(ErrorKind::NestingTooDeep { limit }));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.descend()?;
        self.pos += 1; // '{'

        let mut map = Map::new();
        if self.peek_token()? == b'}' {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            if self.peek_token()? != b'"' {
                return Err(self.error(ErrorKind::ExpectedKey));
            }
            let key = self.parse_string()?;

            if self.peek_token()? != b':' {
                return Err(self.error(ErrorKind::ExpectedColon));
            }
            self.pos += 1;

            let value = self.parse_value()?;
            map.insert(key, value);

            match self.peek_token()? {
                b',' => {
                    self.pos += 1;
                    if self.peek_token()? == b'}' {
                        return Err(self.error(ErrorKind::TrailingComma));
                    }
                }
                b'}' => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrBrace)),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.descend()?;
        self.pos += 1; // '['

        let mut items = Vec::new();
        if self.peek_token()? == b']' {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match self.peek_token()? {
                b',' => {
                    self.pos += 1;
                    if self.peek_token()? == b']' {
                        return Err(self.error(ErrorKind::TrailingComma));
                    }
                }
                b']' => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrBracket)),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }
}
