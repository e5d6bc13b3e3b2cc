//! Text cursor and lexing primitives for the decoder.
//!
//! The input grammar is the subset the encoder produces: objects, arrays,
//! quoted strings without escape processing, numbers and `true`/`false`.
//! Input ends at the end of the slice or at the first NUL byte, whichever
//! comes first.

use memchr::memchr;

use crate::{Error, Result};

/// Maximum bracket nesting accepted by [`check_balanced`].
pub const MAX_NESTING_DEPTH: usize = 64;

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Read position over NUL-terminated JSON text.
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> TextCursor<'a> {
    /// Creates a cursor; everything from the first NUL on is ignored.
    pub fn new(text: &'a [u8]) -> Self {
        let end = memchr(0, text).unwrap_or(text.len());
        Self { text: &text[..end], pos: 0 }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a [u8] {
        &self.text[self.pos..]
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    /// Advances by `n` bytes, clamped to the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    /// Skips whitespace and returns the next byte without consuming it.
    pub fn skip_whitespace(&mut self) -> Result<u8> {
        while let Some(b) = self.peek() {
            if !is_whitespace(b) {
                return Ok(b);
            }
            self.pos += 1;
        }
        Err(Error::UnexpectedEnd { position: self.pos })
    }

    /// Skips whitespace, then consumes exactly `expected`.
    pub fn expect_char(&mut self, expected: u8) -> Result<()> {
        let b = self.skip_whitespace()?;
        if b != expected {
            return Err(Error::unexpected_char(self.pos, expected_label(expected), b));
        }
        self.pos += 1;
        Ok(())
    }

    /// Called right after `{` or `[`: consumes `close` and returns `true` if
    /// it is the next non-whitespace byte, else returns `false` without
    /// consuming anything but whitespace.
    pub fn peek_empty(&mut self, close: u8) -> Result<bool> {
        if self.skip_whitespace()? == close {
            self.pos += 1;
            return Ok(true);
        }
        Ok(false)
    }

    /// Expects `,` (returns `true`, more members follow) or `close`
    /// (returns `false`, container done). Both are consumed.
    pub fn next_separator(&mut self, close: u8) -> Result<bool> {
        let b = self.skip_whitespace()?;
        self.pos += 1;
        match b {
            b',' => Ok(true),
            b if b == close => Ok(false),
            other => Err(Error::unexpected_char(
                self.pos - 1,
                if close == b'}' { "',' or '}'" } else { "',' or ']'" },
                other,
            )),
        }
    }

    /// Reads a quoted key and returns its raw bytes (no escapes).
    pub fn read_key(&mut self) -> Result<&'a [u8]> {
        self.expect_char(b'"')?;
        let start = self.pos;
        let rest = self.rest();
        let Some(len) = memchr(b'"', rest) else {
            return Err(Error::UnterminatedString { position: start - 1 });
        };
        self.pos += len + 1;
        Ok(&rest[..len])
    }

    /// Consumes `literal` if the unconsumed input starts with it.
    pub fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Discards one value of arbitrary shape.
    ///
    /// Tracks bracket depth and quoted runs; stops in front of the first
    /// `,`, `}` or `]` at depth zero, which is left for the caller.
    pub fn skip_value(&mut self) -> Result<()> {
        let start = self.pos;
        let mut depth = 0usize;

        loop {
            let Some(b) = self.peek() else {
                return Err(Error::UnexpectedEnd { position: self.pos });
            };
            match b {
                b'"' => {
                    let Some(len) = memchr(b'"', &self.text[self.pos + 1..]) else {
                        return Err(Error::UnterminatedString { position: self.pos });
                    };
                    self.pos += len + 2;
                    continue;
                }
                b'{' | b'[' => depth += 1,
                b'}' | b']' | b',' if depth == 0 => {
                    if self.text[start..self.pos].iter().all(|&c| is_whitespace(c)) {
                        return Err(Error::unexpected_char(self.pos, "a value", b));
                    }
                    return Ok(());
                }
                b'}' | b']' => depth -= 1,
                _ => {}
            }
            self.pos += 1;
        }
    }
}

fn expected_label(c: u8) -> &'static str {
    match c {
        b'{' => "'{'",
        b'}' => "'}'",
        b'[' => "'['",
        b']' => "']'",
        b':' => "':'",
        b',' => "','",
        b'"' => "'\"'",
        _ => "a structural character",
    }
}

/// Balanced-brace pre-pass over the whole input.
///
/// Runs before any structural parsing, so the recursive descent never has
/// to defend against unterminated nesting. Characters inside double quotes
/// are ignored. `max_depth` is clamped to [`MAX_NESTING_DEPTH`].
pub fn check_balanced(text: &[u8], max_depth: usize) -> Result<()> {
    let max_depth = max_depth.min(MAX_NESTING_DEPTH);
    let text = &text[..memchr(0, text).unwrap_or(text.len())];
    let mut stack = [0u8; MAX_NESTING_DEPTH];
    let mut depth = 0usize;
    let mut pos = 0usize;

    while pos < text.len() {
        match text[pos] {
            b'"' => match memchr(b'"', &text[pos + 1..]) {
                Some(len) => pos += len + 1,
                // Offener String bis zum Ende: es folgt keine Klammer mehr.
                None => break,
            },
            open @ (b'{' | b'[') => {
                if depth >= max_depth {
                    return Err(Error::NestingTooDeep { max_depth });
                }
                stack[depth] = open;
                depth += 1;
            }
            close @ (b'}' | b']') => {
                let opener = if close == b'}' { b'{' } else { b'[' };
                if depth == 0 || stack[depth - 1] != opener {
                    return Err(Error::UnbalancedNesting { position: pos });
                }
                depth -= 1;
            }
            _ => {}
        }
        pos += 1;
    }

    if depth != 0 {
        return Err(Error::UnbalancedNesting { position: text.len() });
    }
    Ok(())
}
