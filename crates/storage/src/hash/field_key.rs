use bytes::Bytes;

use crate::escape::SEPARATOR;
use crate::escape::escape_into;
use crate::escape::escaped_len;
use crate::string::key::VALUE_PREFIX;

/// Physical key of one hash field entry: `'-' || esc(K) || '|' || field`.
///
/// The field bytes are stored verbatim after the separator; readers recover
/// the field by stripping the scan prefix, so fields may themselves contain
/// the separator byte.
#[derive(Debug, PartialEq)]
pub struct HashFieldKey {
    user_key: Bytes,
    field: Bytes,
}

impl HashFieldKey {
    pub fn new(user_key: impl Into<Bytes>, field: impl Into<Bytes>) -> Self {
        Self {
            user_key: user_key.into(),
            field: field.into(),
        }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf =
            Vec::with_capacity(2 + escaped_len(&self.user_key) + self.field.len());
        buf.push(VALUE_PREFIX);
        escape_into(&self.user_key, &mut buf);
        buf.push(SEPARATOR);
        buf.extend_from_slice(&self.field);
        Bytes::from(buf)
    }
}

/// The scan prefix shared by all field entries of a hash: `'-' || esc(K) || '|'`.
///
/// The escaped key portion contains no raw separator, so no other logical
/// key's entries can match this prefix.
pub fn field_scan_prefix(user_key: &[u8]) -> Bytes {
    let mut buf = Vec::with_capacity(2 + escaped_len(user_key));
    buf.push(VALUE_PREFIX);
    escape_into(user_key, &mut buf);
    buf.push(SEPARATOR);
    Bytes::from(buf)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("user", "field", b"-user|field")]
    #[case("key", "f", b"-key|f")]
    #[case("a|b", "f", b"-a\\|b|f")]
    #[case("k", "f|g", b"-k|f|g")]
    fn test_encode(#[case] key: &str, #[case] field: &str, #[case] expected: &[u8]) {
        let field_key = HashFieldKey::new(
            Bytes::copy_from_slice(key.as_bytes()),
            Bytes::copy_from_slice(field.as_bytes()),
        );
        assert_eq!(&field_key.encode()[..], expected);
    }

    #[test]
    fn test_scan_prefix_matches_encoded_fields() {
        let prefix = field_scan_prefix(b"a|b");
        assert_eq!(&prefix[..], b"-a\\|b|");

        let field_key = HashFieldKey::new(Bytes::from_static(b"a|b"), Bytes::from_static(b"f"));
        assert!(field_key.encode().starts_with(&prefix));
    }

    #[test]
    fn test_prefix_does_not_capture_sibling_keys() {
        // The string entry for logical key "a|x" must not match the field
        // scan prefix of hash key "a".
        let prefix = field_scan_prefix(b"a");
        let sibling = crate::string::key::StringValueKey::new(Bytes::from_static(b"a|x")).encode();
        assert!(!sibling.starts_with(&prefix));

        // Nor may fields of hash "a|b" match the prefix of hash "a".
        let nested = HashFieldKey::new(Bytes::from_static(b"a|b"), Bytes::from_static(b"f"));
        assert!(!nested.encode().starts_with(&prefix));
    }
}
