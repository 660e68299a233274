//! RESP data types and value representation.

use bytes::Bytes;

/// Represents a RESP protocol value.
///
/// The null bulk string (`$-1\r\n`) and null array (`*-1\r\n`) are the
/// `None` inhabitants of their variants, not separate kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespValue {
    /// Simple string: `+OK\r\n`
    SimpleString(Bytes),

    /// Error: `-ERR message\r\n`
    Error(Bytes),

    /// Integer: `:1000\r\n`
    Integer(i64),

    /// Bulk string: `$6\r\nfoobar\r\n`
    BulkString(Option<Bytes>),

    /// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`
    Array(Option<Vec<RespValue>>),
}

impl RespValue {
    /// Check if the value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, RespValue::Error(_))
    }

    /// Try to convert to a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RespValue::SimpleString(s) | RespValue::BulkString(Some(s)) => {
                std::str::from_utf8(s).ok()
            }
            _ => None,
        }
    }

    /// Try to convert to bytes
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            RespValue::SimpleString(b) | RespValue::BulkString(Some(b)) => Some(b),
            _ => None,
        }
    }

    /// Try to convert to integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RespValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to convert to array
    pub fn as_array(&self) -> Option<&Vec<RespValue>> {
        match self {
            RespValue::Array(Some(a)) => Some(a),
            _ => None,
        }
    }

    /// Try to consume and convert to Vec<RespValue>
    pub fn into_vec(self) -> Option<Vec<RespValue>> {
        match self {
            RespValue::Array(Some(a)) => Some(a),
            _ => None,
        }
    }

    // Convenience constructors

    /// Create a simple string value
    pub fn simple_string(s: impl Into<Bytes>) -> Self {
        RespValue::SimpleString(s.into())
    }

    /// Create a bulk string value
    pub fn bulk_string(s: impl Into<Bytes>) -> Self {
        RespValue::BulkString(Some(s.into()))
    }

    /// Create an error value
    pub fn error(e: impl Into<Bytes>) -> Self {
        RespValue::Error(e.into())
    }

    /// Create an integer value
    pub fn integer(i: i64) -> Self {
        RespValue::Integer(i)
    }

    /// Create an array value from an iterator
    pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
        RespValue::Array(Some(items.into_iter().collect()))
    }

    /// The null bulk string (`$-1\r\n`)
    pub fn null_bulk() -> Self {
        RespValue::BulkString(None)
    }

    /// The null array (`*-1\r\n`)
    pub fn null_array() -> Self {
        RespValue::Array(None)
    }
}

impl From<&str> for RespValue {
    fn from(s: &str) -> Self {
        RespValue::BulkString(Some(Bytes::from(s.to_string())))
    }
}

impl From<String> for RespValue {
    fn from(s: String) -> Self {
        RespValue::BulkString(Some(Bytes::from(s)))
    }
}

impl From<&[u8]> for RespValue {
    fn from(b: &[u8]) -> Self {
        RespValue::BulkString(Some(Bytes::copy_from_slice(b)))
    }
}

impl From<Bytes> for RespValue {
    fn from(b: Bytes) -> Self {
        RespValue::BulkString(Some(b))
    }
}

impl From<i64> for RespValue {
    fn from(i: i64) -> Self {
        RespValue::Integer(i)
    }
}

impl From<Vec<RespValue>> for RespValue {
    fn from(v: Vec<RespValue>) -> Self {
        RespValue::Array(Some(v))
    }
}

impl<T: Into<RespValue>> From<Option<T>> for RespValue {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => RespValue::BulkString(None),
        }
    }
}
