use bytes::Buf;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::data_type::DataType;
use crate::error::DecoderError;

/// Current metadata blob format version.
pub const META_VERSION: u8 = 1;

/// High-nibble bit of the tag byte marking a stored expiry instant.
const FLAG_HAS_EXPIRY: u8 = 0x10;

/// Wall clock in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

/// The 18-byte blob stored in a meta entry.
///
/// Layout: version byte, then a tag byte (low nibble = type tag, high-nibble
/// bit 0 = has-expiry), then the expiry instant as big-endian milliseconds in
/// the remaining 16 bytes (zero when no expiry is set).
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub data_type: DataType,
    pub expire_at: Option<u64>,
}

impl Metadata {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            expire_at: None,
        }
    }

    pub fn with_expiry(data_type: DataType, expire_at: Option<u64>) -> Self {
        Self {
            data_type,
            expire_at,
        }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(18);
        buf.put_u8(META_VERSION);
        let mut tag = self.data_type as u8;
        if self.expire_at.is_some() {
            tag |= FLAG_HAS_EXPIRY;
        }
        buf.put_u8(tag);
        buf.put_u128(self.expire_at.unwrap_or(0) as u128);
        buf.freeze()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DecoderError> {
        if bytes.is_empty() {
            return Err(DecoderError::Empty);
        }
        if bytes.len() < 18 {
            return Err(DecoderError::InvalidLength);
        }

        let mut buf = bytes;
        let version = buf.get_u8();
        if version != META_VERSION {
            return Err(DecoderError::InvalidVersion(version));
        }
        let tag = buf.get_u8();
        let data_type = DataType::from_u8(tag & 0x0F).ok_or(DecoderError::InvalidType)?;
        let instant = buf.get_u128();
        let expire_at = if tag & FLAG_HAS_EXPIRY != 0 {
            Some(instant as u64)
        } else {
            None
        };
        Ok(Self {
            data_type,
            expire_at,
        })
    }

    /// Whether the stored expiry instant has passed.
    ///
    /// Keys without an expiry never expire.
    pub fn is_expired(&self) -> bool {
        match self.expire_at {
            Some(at) => now_millis() >= at,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DataType::String, None)]
    #[case(DataType::String, Some(1_900_000_000_000))]
    #[case(DataType::Hash, None)]
    #[case(DataType::Hash, Some(u64::MAX))]
    fn test_roundtrip(#[case] data_type: DataType, #[case] expire_at: Option<u64>) {
        let meta = Metadata::with_expiry(data_type, expire_at);
        let encoded = meta.encode();
        assert_eq!(encoded.len(), 18);
        assert_eq!(encoded[0], META_VERSION);
        let decoded = Metadata::decode(&encoded).unwrap();
        assert_eq!(decoded, meta);
    }

    #[test]
    fn test_tag_byte_layout() {
        let plain = Metadata::new(DataType::Hash).encode();
        assert_eq!(plain[1], 4);

        let expiring = Metadata::with_expiry(DataType::String, Some(42)).encode();
        assert_eq!(expiring[1], 0x10);
        assert_eq!(&expiring[2..], &42u128.to_be_bytes());
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            Metadata::decode(b"").unwrap_err(),
            DecoderError::Empty
        ));
        assert!(matches!(
            Metadata::decode(b"\x01\x00").unwrap_err(),
            DecoderError::InvalidLength
        ));

        let mut bad_version = Metadata::new(DataType::String).encode().to_vec();
        bad_version[0] = 2;
        assert!(matches!(
            Metadata::decode(&bad_version).unwrap_err(),
            DecoderError::InvalidVersion(2)
        ));

        let mut bad_type = Metadata::new(DataType::String).encode().to_vec();
        bad_type[1] = 0x0F;
        assert!(matches!(
            Metadata::decode(&bad_type).unwrap_err(),
            DecoderError::InvalidType
        ));
    }

    #[test]
    fn test_expiry_check() {
        assert!(!Metadata::new(DataType::String).is_expired());
        assert!(Metadata::with_expiry(DataType::String, Some(1)).is_expired());
        assert!(
            !Metadata::with_expiry(DataType::String, Some(now_millis() + 60_000)).is_expired()
        );
    }
}
