use bytes::Bytes;

use crate::escape::escape_into;
use crate::escape::escaped_len;

/// Role prefix of value entries.
pub const VALUE_PREFIX: u8 = b'-';

/// Physical key of a string value entry: `'-' || esc(K)`.
///
/// The logical key goes through separator escaping so string entries can
/// never fall inside another key's hash field scan.
#[derive(Debug, PartialEq)]
pub struct StringValueKey {
    user_key: Bytes,
}

impl StringValueKey {
    pub fn new(user_key: impl Into<Bytes>) -> Self {
        Self {
            user_key: user_key.into(),
        }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = Vec::with_capacity(1 + escaped_len(&self.user_key));
        buf.push(VALUE_PREFIX);
        escape_into(&self.user_key, &mut buf);
        Bytes::from(buf)
    }
}
