use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_BIT_OFFSET;
use super::ERR_BIT_VALUE;
use super::ERR_STRING_LIMIT;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::STRING_LIMIT;
use super::utils::parse_i64;

pub struct SetBitCmd {
    meta: CmdMeta,
}

impl Default for SetBitCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "setbit",
                arity: 4,
            },
        }
    }
}

#[async_trait]
impl Cmd for SetBitCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(offset) = parse_i64(&args[1]).filter(|o| *o >= 0) else {
            return Ok(RespValue::error(ERR_BIT_OFFSET));
        };
        let byte_index = (offset / 8) as usize;
        let bit_pos = (offset % 8) as u32;
        if byte_index + 1 > STRING_LIMIT {
            return Ok(RespValue::error(ERR_STRING_LIMIT));
        }

        let bit = match parse_i64(&args[2]) {
            Some(b @ (0 | 1)) => b,
            _ => return Ok(RespValue::error(ERR_BIT_VALUE)),
        };

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.write().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::String
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }

        let mut val = match &meta {
            Some(_) => store
                .get_string(key.clone())
                .await?
                .unwrap_or_default()
                .to_vec(),
            None => Vec::new(),
        };
        if val.len() < byte_index + 1 {
            val.resize(byte_index + 1, 0);
        }

        let old = val[byte_index] >> (7 - bit_pos) & 0x01;
        if bit == 0 {
            val[byte_index] &= !(0x01 << (7 - bit_pos));
        } else {
            val[byte_index] |= 0x01 << (7 - bit_pos);
        }

        let expire_at = meta.and_then(|m| m.expire_at);
        store.put_string(key, Bytes::from(val), expire_at).await?;
        Ok(RespValue::integer(old as i64))
    }
}
