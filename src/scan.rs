//! Low-level scanning primitives shared by the decoder.
//!
//! [`Scanner`] holds the input text and a byte cursor into it. Every primitive
//! either advances the cursor past what it recognised or, on failure, leaves the
//! cursor where it was.
//!
//! The cursor only ever stops on ASCII bytes (structural characters, quotes,
//! whitespace, digits), so slices taken between two cursor positions are always
//! valid UTF-8.
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatjson::scan::Scanner;
//!
//! let mut scanner = Scanner::new("  \"key\" -42");
//! scanner.skip_whitespace();
//! assert_eq!(scanner.read_quoted_string(), Ok("key"));
//! scanner.skip_whitespace();
//! assert_eq!(scanner.read_integer(), Ok(-42));
//! assert!(scanner.at_end());
//! ```

use thiserror::Error;

/// Failure of a single scanning primitive.
///
/// The decoder collapses both kinds into [`crate::Error::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Missing opening quote, or no closing quote before end of input.
    #[error("malformed string literal")]
    MalformedString,

    /// No integer literal at the cursor, or one outside the `i64` range.
    #[error("malformed integer literal")]
    MalformedNumber,
}

impl From<ScanError> for crate::Error {
    fn from(_: ScanError) -> Self {
        crate::Error::InvalidInput
    }
}

/// Read cursor over a text buffer.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Scanner { input, position: 0 }
    }

    /// Current byte offset into the input.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte under the cursor without consuming it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Consumes `expected` if it is the byte under the cursor.
    ///
    /// `expected` must be ASCII.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        debug_assert!(expected.is_ascii());
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Advances past a run of whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`).
    ///
    /// Never fails; at end of input it simply stops.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.position += 1;
        }
    }

    /// Reads a double-quoted string and returns the raw text between the quotes.
    ///
    /// No escape processing is done: the string ends at the first `"` after the
    /// opening one, and a backslash is kept literally.
    ///
    /// # Errors
    ///
    /// [`ScanError::MalformedString`] when the cursor is not on a `"` or the
    /// string is not terminated.
    pub fn read_quoted_string(&mut self) -> Result<&'a str, ScanError> {
        if self.peek() != Some(b'"') {
            return Err(ScanError::MalformedString);
        }

        let start = self.position + 1;
        let len = self.input.as_bytes()[start..]
            .iter()
            .position(|&b| b == b'"')
            .ok_or(ScanError::MalformedString)?;

        let end = start + len;
        self.position = end + 1;
        Ok(&self.input[start..end])
    }

    /// Reads a base-10 integer literal: an optional `+` or `-` followed by at
    /// least one ASCII digit. Scanning stops at the first non-digit.
    ///
    /// # Errors
    ///
    /// [`ScanError::MalformedNumber`] when no digits follow the cursor (a lone
    /// sign included) or the literal does not fit in an `i64`.
    pub fn read_integer(&mut self) -> Result<i64, ScanError> {
        let bytes = self.input.as_bytes();
        let start = self.position;
        let mut end = start;

        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end == digits {
            return Err(ScanError::MalformedNumber);
        }

        let value = self.input[start..end]
            .parse::<i64>()
            .map_err(|_| ScanError::MalformedNumber)?;
        self.position = end;
        Ok(value)
    }
}

// Same set as C `isspace` in the default locale.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        let mut s = Scanner::new(" \t\r\n\x0B\x0Cx");
        s.skip_whitespace();
        assert_eq!(s.peek(), Some(b'x'));

        let mut s = Scanner::new("   ");
        s.skip_whitespace();
        assert!(s.at_end());
        s.skip_whitespace();
        assert!(s.at_end());
    }

    #[test]
    fn test_read_quoted_string() {
        let mut s = Scanner::new("\"hello\" rest");
        assert_eq!(s.read_quoted_string(), Ok("hello"));
        assert_eq!(s.position(), 7);

        let mut s = Scanner::new("\"\"");
        assert_eq!(s.read_quoted_string(), Ok(""));
        assert!(s.at_end());
    }

    #[test]
    fn test_read_quoted_string_is_raw() {
        let mut s = Scanner::new(r#""a\nb""#);
        assert_eq!(s.read_quoted_string(), Ok(r"a\nb"));

        // A backslash does not protect the quote that follows it.
        let mut s = Scanner::new(r#""a\"b""#);
        assert_eq!(s.read_quoted_string(), Ok(r"a\"));
        assert_eq!(s.peek(), Some(b'b'));
    }

    #[test]
    fn test_read_quoted_string_multibyte() {
        let mut s = Scanner::new("\"ключ\":");
        assert_eq!(s.read_quoted_string(), Ok("ключ"));
        assert_eq!(s.peek(), Some(b':'));
    }

    #[test]
    fn test_read_quoted_string_errors() {
        let mut s = Scanner::new("abc");
        assert_eq!(s.read_quoted_string(), Err(ScanError::MalformedString));
        assert_eq!(s.position(), 0);

        let mut s = Scanner::new("\"unterminated");
        assert_eq!(s.read_quoted_string(), Err(ScanError::MalformedString));
        assert_eq!(s.position(), 0);

        let mut s = Scanner::new("");
        assert_eq!(s.read_quoted_string(), Err(ScanError::MalformedString));
    }

    #[test]
    fn test_read_integer() {
        let mut s = Scanner::new("123,");
        assert_eq!(s.read_integer(), Ok(123));
        assert_eq!(s.peek(), Some(b','));

        let mut s = Scanner::new("-7}");
        assert_eq!(s.read_integer(), Ok(-7));

        let mut s = Scanner::new("+5");
        assert_eq!(s.read_integer(), Ok(5));

        let mut s = Scanner::new("007");
        assert_eq!(s.read_integer(), Ok(7));

        let mut s = Scanner::new("12.5");
        assert_eq!(s.read_integer(), Ok(12));
        assert_eq!(s.peek(), Some(b'.'));
    }

    #[test]
    fn test_read_integer_limits() {
        let mut s = Scanner::new("9223372036854775807");
        assert_eq!(s.read_integer(), Ok(i64::MAX));

        let mut s = Scanner::new("-9223372036854775808");
        assert_eq!(s.read_integer(), Ok(i64::MIN));

        let mut s = Scanner::new("9223372036854775808");
        assert_eq!(s.read_integer(), Err(ScanError::MalformedNumber));
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn test_read_integer_errors() {
        for input in ["", "-", "+", "true", "x1", " 1", "-x"] {
            let mut s = Scanner::new(input);
            assert_eq!(s.read_integer(), Err(ScanError::MalformedNumber), "{input:?}");
            assert_eq!(s.position(), 0);
        }
    }

    #[test]
    fn test_scan_error_converts_to_invalid_input() {
        let err: crate::Error = ScanError::MalformedNumber.into();
        assert_eq!(err, crate::Error::InvalidInput);
    }
}
