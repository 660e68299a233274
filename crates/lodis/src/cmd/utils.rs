use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::CmdResult;
use super::ERR_NOT_INTEGER;
use super::ERR_OVERFLOW;
use super::ERR_WRONG_TYPE;
use super::Extras;

/// Maximum stored string length: 512 MiB.
pub const STRING_LIMIT: usize = 512 * 1024 * 1024;

pub fn parse_i64(arg: &[u8]) -> Option<i64> {
    std::str::from_utf8(arg).ok()?.parse().ok()
}

pub fn parse_f64(arg: &[u8]) -> Option<f64> {
    std::str::from_utf8(arg).ok()?.parse().ok()
}

/// Normalize a signed `[start, end]` pair against length `len` into a
/// half-open `[start, end)` range. The result is empty when `end <= start`;
/// slice with [`range_slice`], which also clamps the open end.
pub fn calc_range(start: i64, end: i64, len: usize) -> (usize, usize) {
    let n = len as i64;

    let start = if start >= n {
        n
    } else if start <= -n {
        0
    } else if start < 0 {
        start + n
    } else {
        start
    };

    let end = if end >= n {
        n
    } else if end <= -n {
        1
    } else if end < 0 {
        n + end + 1
    } else {
        end + 1
    };

    (start as usize, end as usize)
}

/// Slice `val` by a normalized range, empty on degenerate bounds.
pub fn range_slice(val: &[u8], start: usize, end: usize) -> &[u8] {
    if end <= start {
        return &[];
    }
    let end = end.min(val.len());
    if start >= end {
        return &[];
    }
    &val[start..end]
}

/// Index of the first set bit in a byte, MSB first; -1 when the byte is zero.
pub fn first_set_bit(b: u8) -> i64 {
    if b == 0 { -1 } else { b.leading_zeros() as i64 }
}

/// Index of the first clear bit in a byte, MSB first; 8 when the byte is 0xFF.
pub fn first_clear_bit(b: u8) -> i64 {
    (!b).leading_zeros() as i64
}

// Shared body of INCR / DECR / INCRBY / DECRBY.
pub(crate) async fn incr_by(ex: &mut Extras, key: Bytes, by: i64) -> CmdResult {
    let db = ex.db.clone();
    let store = db.write().await;

    let meta = store.metadata(&key).await?;
    if let Some(meta) = &meta
        && meta.data_type != DataType::String
    {
        return Ok(RespValue::error(ERR_WRONG_TYPE));
    }

    let current = match &meta {
        Some(_) => {
            let val = store.get_string(key.clone()).await?.unwrap_or_default();
            match parse_i64(&val) {
                Some(i) => i,
                None => return Ok(RespValue::error(ERR_NOT_INTEGER)),
            }
        }
        None => 0,
    };

    let Some(new_val) = current.checked_add(by) else {
        return Ok(RespValue::error(ERR_OVERFLOW));
    };

    let expire_at = meta.and_then(|m| m.expire_at);
    store
        .put_string(key, Bytes::from(new_val.to_string()), expire_at)
        .await?;
    Ok(RespValue::integer(new_val))
}
