//! Streaming RESP protocol parser.

use bytes::Buf;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::ParseError;
use crate::error::RespError;
use crate::types::RespValue;
use crate::utils::*;

/// Result of a parsing attempt.
#[derive(Debug)]
pub enum RespParseResult {
    /// A complete RESP value was parsed.
    Complete(RespValue),
    /// The buffer does not contain enough data to parse a complete value.
    Incomplete,
    /// An error occurred during parsing.
    Error(RespError),
}

/// A stateful RESP parser that supports streaming.
///
/// Partial frames leave the buffer untouched up to the last fully consumed
/// element, so the caller can read more bytes from the socket and call
/// [`RespParser::parse`] again.
pub struct RespParser {
    frames: Vec<Frame>,
}

#[derive(Debug)]
enum Frame {
    Root,
    Array {
        expected: usize,
        elements: Vec<RespValue>,
    },
}

// Helper enum for parse_step
enum ParsedItem {
    Value(RespValue),
    FramePushed,
}

impl Default for RespParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RespParser {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Parse a RESP value from a mutable BytesMut buffer.
    ///
    /// If successful, consumes the parsed bytes and returns
    /// `RespParseResult::Complete(value)`. If incomplete, returns
    /// `RespParseResult::Incomplete`. If an error occurs, returns
    /// `RespParseResult::Error(error)`.
    pub fn parse(&mut self, buf: &mut BytesMut) -> RespParseResult {
        if self.frames.is_empty() {
            self.frames.push(Frame::Root);
        }

        loop {
            match self.parse_step(buf) {
                Ok(Some(ParsedItem::FramePushed)) => {
                    continue;
                }
                Ok(Some(ParsedItem::Value(val))) => match self.handle_parsed_value(val) {
                    Some(final_value) => return RespParseResult::Complete(final_value),
                    None => continue,
                },
                Ok(None) => return RespParseResult::Incomplete,
                Err(e) => return RespParseResult::Error(RespError::Parse(e)),
            }
        }
    }

    // Inject a completed value into the top frame. Returns `Some` once the
    // root value is complete.
    fn handle_parsed_value(&mut self, value: RespValue) -> Option<RespValue> {
        let Some(frame) = self.frames.last_mut() else {
            return Some(value);
        };
        match frame {
            Frame::Root => {
                // Pop the root so the parser is reset for the next command.
                self.frames.pop();
                Some(value)
            }
            Frame::Array { expected, elements } => {
                elements.push(value);
                *expected -= 1;
                if *expected == 0 {
                    let arr = std::mem::take(elements);
                    self.frames.pop();
                    self.handle_parsed_value(RespValue::Array(Some(arr)))
                } else {
                    None
                }
            }
        }
    }

    /// Tries to parse the next token.
    /// If it's a primitive, returns `Ok(Some(ParsedItem::Value(v)))`.
    /// If it's an array header, pushes a frame and returns
    /// `Ok(Some(ParsedItem::FramePushed))`. If incomplete, returns `Ok(None)`.
    fn parse_step(&mut self, buf: &mut BytesMut) -> Result<Option<ParsedItem>, ParseError> {
        if buf.is_empty() {
            return Ok(None);
        }

        match buf[0] {
            SIMPLE_STRING => self.parse_simple_string(buf),
            ERROR => self.parse_error(buf),
            INTEGER => self.parse_integer(buf),
            BULK_STRING => self.parse_bulk_string(buf),
            ARRAY => self.start_array(buf),
            // Any other first byte starts a telnet-style inline command.
            _ => self.parse_inline_command(buf),
        }
    }

    fn parse_inline_command(
        &mut self,
        buf: &mut BytesMut,
    ) -> Result<Option<ParsedItem>, ParseError> {
        if let Some((line, total_len)) = peek_line(buf) {
            // Format: "CMD arg1 arg2 ...\r\n", whitespace-split into an
            // array of bulk strings.
            let args: Vec<RespValue> = line
                .split(|b| b.is_ascii_whitespace())
                .filter(|part| !part.is_empty())
                .map(|part| RespValue::BulkString(Some(Bytes::copy_from_slice(part))))
                .collect();

            buf.advance(total_len);
            Ok(Some(ParsedItem::Value(RespValue::Array(Some(args)))))
        } else {
            Ok(None)
        }
    }

    fn parse_simple_string(
        &mut self,
        buf: &mut BytesMut,
    ) -> Result<Option<ParsedItem>, ParseError> {
        if let Some((line, total_len)) = peek_line(&buf[1..]) {
            let value = Bytes::copy_from_slice(line);
            buf.advance(1 + total_len);
            Ok(Some(ParsedItem::Value(RespValue::SimpleString(value))))
        } else {
            Ok(None)
        }
    }

    fn parse_error(&mut self, buf: &mut BytesMut) -> Result<Option<ParsedItem>, ParseError> {
        if let Some((line, total_len)) = peek_line(&buf[1..]) {
            let value = Bytes::copy_from_slice(line);
            buf.advance(1 + total_len);
            Ok(Some(ParsedItem::Value(RespValue::Error(value))))
        } else {
            Ok(None)
        }
    }

    fn parse_integer(&mut self, buf: &mut BytesMut) -> Result<Option<ParsedItem>, ParseError> {
        if let Some((line, total_len)) = peek_line(&buf[1..]) {
            let num = crate::utils::parse_integer(line)?;
            buf.advance(1 + total_len);
            Ok(Some(ParsedItem::Value(RespValue::Integer(num))))
        } else {
            Ok(None)
        }
    }

    fn parse_bulk_string(&mut self, buf: &mut BytesMut) -> Result<Option<ParsedItem>, ParseError> {
        // $6\r\nfoobar\r\n
        if let Some((line, len_consumed)) = peek_line(&buf[1..]) {
            let length = crate::utils::parse_integer(line)?;

            if length == -1 {
                buf.advance(1 + len_consumed);
                return Ok(Some(ParsedItem::Value(RespValue::BulkString(None))));
            }
            if length < -1 {
                return Err(ParseError::InvalidBulkStringLength(length));
            }

            let length = length as usize;
            let total_needed = 1 + len_consumed + length + 2; // +2 for CRLF

            if buf.len() < total_needed {
                return Ok(None);
            }

            buf.advance(1 + len_consumed);
            let data = buf.split_to(length).freeze();
            if &buf[0..2] != CRLF {
                return Err(ParseError::InvalidFormat(
                    "Missing CRLF after bulk string".to_string(),
                ));
            }
            buf.advance(2);

            Ok(Some(ParsedItem::Value(RespValue::BulkString(Some(data)))))
        } else {
            Ok(None)
        }
    }

    fn start_array(&mut self, buf: &mut BytesMut) -> Result<Option<ParsedItem>, ParseError> {
        if let Some((line, total_len)) = peek_line(&buf[1..]) {
            let length = crate::utils::parse_integer(line)?;
            buf.advance(1 + total_len);

            if length == -1 {
                return Ok(Some(ParsedItem::Value(RespValue::Array(None))));
            }
            if length < -1 {
                return Err(ParseError::InvalidArrayLength(length));
            }

            let length = length as usize;
            if length == 0 {
                return Ok(Some(ParsedItem::Value(RespValue::Array(Some(Vec::new())))));
            }

            self.frames.push(Frame::Array {
                expected: length,
                elements: Vec::with_capacity(length),
            });
            Ok(Some(ParsedItem::FramePushed))
        } else {
            Ok(None)
        }
    }
}

/// Convenience function for one-off parsing.
///
/// Creates a temporary parser and tries to parse one value. When streaming is
/// needed, use [`RespParser`] directly.
pub fn parse(buf: &mut BytesMut) -> Result<RespValue, ParseError> {
    let mut parser = RespParser::new();
    match parser.parse(buf) {
        RespParseResult::Complete(val) => Ok(val),
        RespParseResult::Incomplete => Err(ParseError::UnexpectedEOF),
        RespParseResult::Error(RespError::Parse(e)) => Err(e),
    }
}
