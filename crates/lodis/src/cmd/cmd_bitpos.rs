use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_BIT_ARG;
use super::ERR_NOT_INTEGER;
use super::ERR_SYNTAX;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::calc_range;
use super::utils::first_clear_bit;
use super::utils::first_set_bit;
use super::utils::parse_i64;
use super::utils::range_slice;

pub struct BitPosCmd {
    meta: CmdMeta,
}

impl Default for BitPosCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "bitpos",
                arity: -3,
            },
        }
    }
}

#[async_trait]
impl Cmd for BitPosCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    // BITPOS key bit [start [end]]
    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let looking_for_set = match parse_i64(&args[1]) {
            Some(1) => true,
            Some(0) => false,
            _ => return Ok(RespValue::error(ERR_BIT_ARG)),
        };

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::String
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }
        // Absent key: no 1 to find, but every bit reads as 0.
        if meta.is_none() {
            return Ok(RespValue::integer(if looking_for_set { -1 } else { 0 }));
        }
        if args.len() > 4 {
            return Ok(RespValue::error(ERR_SYNTAX));
        }

        let val = store.get_string(key).await?.unwrap_or_default();

        let mut start = 0;
        let mut end = val.len() as i64;
        if args.len() >= 3 {
            match parse_i64(&args[2]) {
                Some(s) => start = s,
                None => return Ok(RespValue::error(ERR_NOT_INTEGER)),
            }
        }
        if args.len() == 4 {
            match parse_i64(&args[3]) {
                Some(e) => end = e,
                None => return Ok(RespValue::error(ERR_NOT_INTEGER)),
            }
        }
        let (start, end) = calc_range(start, end, val.len());
        if end <= start {
            return Ok(RespValue::integer(-1));
        }

        let mut pos: i64 = 0;
        let mut found = false;
        for &b in range_slice(&val, start, end) {
            let in_byte = if looking_for_set {
                first_set_bit(b)
            } else {
                first_clear_bit(b)
            };
            if (looking_for_set && in_byte != -1) || (!looking_for_set && in_byte != 8) {
                pos += in_byte;
                found = true;
                break;
            }
            pos += 8;
        }

        if found {
            return Ok(RespValue::integer(8 * start as i64 + pos));
        }
        if looking_for_set {
            return Ok(RespValue::integer(-1));
        }
        // Looking for 0 with no explicit end: the value is treated as padded
        // with zeros on the right. With both endpoints given, the caller
        // named a closed range and gets -1.
        if args.len() < 4 {
            return Ok(RespValue::integer(8 * end as i64));
        }
        Ok(RespValue::integer(-1))
    }
}
