//! Utility functions and constants for RESP protocol.

use crate::error::ParseError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Find the position of CRLF in a byte slice
#[inline]
pub fn find_crlf(buf: &[u8]) -> Option<usize> {
    memchr::memmem::find(buf, CRLF)
}

/// Peek a line from the buffer without consuming it.
///
/// Returns the line contents (without CRLF) and the total number of bytes the
/// line occupies (including CRLF), or `None` if no complete line is buffered.
#[inline]
pub fn peek_line(buf: &[u8]) -> Option<(&[u8], usize)> {
    find_crlf(buf).map(|pos| (&buf[..pos], pos + 2))
}

/// Parse a signed decimal integer from a byte slice
#[inline]
pub fn parse_integer(buf: &[u8]) -> Result<i64, ParseError> {
    let s = std::str::from_utf8(buf)?;
    s.parse::<i64>()
        .map_err(|e| ParseError::InvalidInteger(e.to_string()))
}
