//! Separator escaping for the logical-key portion of value keys.
//!
//! Hash field keys embed the logical key and the field name around a `'|'`
//! separator. To keep prefix scans unambiguous, `'|'` and the escape byte
//! itself are escaped inside the logical-key portion; the escaped form never
//! contains a raw separator, so the first raw `'|'` always marks the start of
//! the field. Field bytes are stored verbatim — they are recovered by
//! stripping the known prefix, never by searching for the separator.

/// Separator between the logical key and a hash field in a value key.
pub const SEPARATOR: u8 = b'|';

/// Escape byte used inside the logical-key portion.
pub const ESCAPE: u8 = b'\\';

/// Append the escaped form of `key` to `out`.
pub fn escape_into(key: &[u8], out: &mut Vec<u8>) {
    for &b in key {
        if b == SEPARATOR || b == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(b);
    }
}

/// Length of the escaped form of `key`.
pub fn escaped_len(key: &[u8]) -> usize {
    key.len()
        + key
            .iter()
            .filter(|&&b| b == SEPARATOR || b == ESCAPE)
            .count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"plain", b"plain")]
    #[case(b"", b"")]
    #[case(b"a|b", b"a\\|b")]
    #[case(b"a\\b", b"a\\\\b")]
    #[case(b"|\\|", b"\\|\\\\\\|")]
    fn test_escape(#[case] key: &[u8], #[case] expected: &[u8]) {
        let mut out = Vec::new();
        escape_into(key, &mut out);
        assert_eq!(out, expected);
        assert_eq!(out.len(), escaped_len(key));
    }

    #[test]
    fn test_escaped_form_never_contains_raw_separator() {
        let nasty = b"||\\|x\\\\|";
        let mut out = Vec::new();
        escape_into(nasty, &mut out);
        // Every separator must be immediately preceded by an odd run of
        // escape bytes.
        for (i, &b) in out.iter().enumerate() {
            if b == SEPARATOR {
                let escapes = out[..i].iter().rev().take_while(|&&c| c == ESCAPE).count();
                assert!(escapes % 2 == 1, "raw separator at offset {}", i);
            }
        }
    }
}
