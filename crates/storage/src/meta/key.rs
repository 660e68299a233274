use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

/// Role prefix of meta entries.
pub const META_PREFIX: u8 = b'+';

/// Physical key of a logical key's meta entry: `'+' || K`.
///
/// The logical key is stored raw; meta entries are only ever point-looked-up,
/// so no separator disambiguation is needed here.
#[derive(Debug, PartialEq)]
pub struct MetaKey {
    user_key: Bytes,
}

impl MetaKey {
    pub fn new(user_key: impl Into<Bytes>) -> Self {
        Self {
            user_key: user_key.into(),
        }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(1 + self.user_key.len());
        buf.put_u8(META_PREFIX);
        buf.extend_from_slice(&self.user_key);
        buf.freeze()
    }
}
