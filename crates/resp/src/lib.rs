//! # RESP - Redis Serialization Protocol Library
//!
//! Parsing and encoding of the Redis serialization protocol: simple strings,
//! errors, integers, bulk strings, and arrays, plus telnet-style inline
//! commands.
//!
//! RESP is binary-safe: bulk strings are prefix-length framed, so payloads may
//! contain any byte. Parsing is streaming — feed a socket buffer to
//! [`RespParser::parse`] and it reports `Incomplete` until a full frame is
//! buffered.
//!
//! ## Example
//!
//! ```rust
//! use bytes::BytesMut;
//!
//! let mut buf = BytesMut::from(&b"+OK\r\n"[..]);
//! let value = resp::parse(&mut buf).unwrap();
//! assert_eq!(value.as_str(), Some("OK"));
//! ```

mod encode;
mod error;
mod parser;
mod types;
mod utils;

pub use encode::RespEncoder;
pub use error::ParseError;
pub use error::RespError;
pub use parser::RespParseResult;
pub use parser::RespParser;
pub use parser::parse;
pub use types::RespValue;
