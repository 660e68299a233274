//! RESP encoding.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::RespValue;
use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;
use crate::utils::ERROR;
use crate::utils::INTEGER;
use crate::utils::SIMPLE_STRING;

/// Trait for encoding RESP values into a reply buffer.
pub trait RespEncoder {
    fn encode_to(&self, buf: &mut BytesMut);

    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.encode_to(&mut buf);
        buf.freeze()
    }
}

impl RespEncoder for RespValue {
    fn encode_to(&self, buf: &mut BytesMut) {
        match self {
            RespValue::SimpleString(s) => encode_line(buf, SIMPLE_STRING, s),
            RespValue::Error(e) => encode_line(buf, ERROR, e),
            RespValue::Integer(i) => encode_integer(buf, *i),
            RespValue::BulkString(s) => encode_bulk_string(buf, s.as_deref()),
            RespValue::Array(arr) => encode_array(buf, arr.as_deref()),
        }
    }
}

#[inline]
fn encode_line(buf: &mut BytesMut, marker: u8, line: &[u8]) {
    buf.put_u8(marker);
    buf.put_slice(line);
    buf.put_slice(CRLF);
}

#[inline]
fn encode_integer(buf: &mut BytesMut, i: i64) {
    buf.put_u8(INTEGER);
    buf.put_slice(i.to_string().as_bytes());
    buf.put_slice(CRLF);
}

#[inline]
fn encode_length(buf: &mut BytesMut, marker: u8, length: usize) {
    buf.put_u8(marker);
    buf.put_slice(length.to_string().as_bytes());
    buf.put_slice(CRLF);
}

#[inline]
fn encode_bulk_string(buf: &mut BytesMut, s: Option<&[u8]>) {
    match s {
        Some(s) => {
            encode_length(buf, BULK_STRING, s.len());
            buf.put_slice(s);
            buf.put_slice(CRLF);
        }
        None => buf.put_slice(b"$-1\r\n"),
    }
}

fn encode_array(buf: &mut BytesMut, arr: Option<&[RespValue]>) {
    match arr {
        Some(arr) => {
            encode_length(buf, ARRAY, arr.len());
            for value in arr {
                value.encode_to(buf);
            }
        }
        None => buf.put_slice(b"*-1\r\n"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_encode_simple_string() {
        let val = RespValue::SimpleString(Bytes::from_static(b"OK"));
        assert_eq!(val.encode(), b"+OK\r\n".as_slice());
    }

    #[test]
    fn test_encode_error() {
        let val = RespValue::Error(Bytes::from_static(b"ERR"));
        assert_eq!(val.encode(), b"-ERR\r\n".as_slice());
    }

    #[rstest]
    #[case(100, b":100\r\n")]
    #[case(-100, b":-100\r\n")]
    #[case(0, b":0\r\n")]
    fn test_encode_integer(#[case] input: i64, #[case] expected: &[u8]) {
        let val = RespValue::Integer(input);
        assert_eq!(val.encode(), expected);
    }

    #[test]
    fn test_encode_bulk_string() {
        let val = RespValue::BulkString(Some(Bytes::from_static(b"hello")));
        assert_eq!(val.encode(), b"$5\r\nhello\r\n".as_slice());
    }

    #[test]
    fn test_encode_bulk_string_empty() {
        let val = RespValue::BulkString(Some(Bytes::new()));
        assert_eq!(val.encode(), b"$0\r\n\r\n".as_slice());
    }

    #[test]
    fn test_encode_null_bulk_string() {
        let val = RespValue::BulkString(None);
        assert_eq!(val.encode(), b"$-1\r\n".as_slice());
    }

    #[test]
    fn test_encode_array() {
        let val = RespValue::Array(Some(vec![
            RespValue::SimpleString(Bytes::from_static(b"hello")),
            RespValue::Integer(42),
        ]));
        assert_eq!(val.encode(), b"*2\r\n+hello\r\n:42\r\n".as_slice());
    }

    #[test]
    fn test_encode_array_empty() {
        let val = RespValue::Array(Some(vec![]));
        assert_eq!(val.encode(), b"*0\r\n".as_slice());
    }

    #[test]
    fn test_encode_null_array() {
        let val = RespValue::Array(None);
        assert_eq!(val.encode(), b"*-1\r\n".as_slice());
    }
}
