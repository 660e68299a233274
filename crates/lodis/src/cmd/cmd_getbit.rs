use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_BIT_OFFSET;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::parse_i64;

pub struct GetBitCmd {
    meta: CmdMeta,
}

impl Default for GetBitCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "getbit",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for GetBitCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(offset) = parse_i64(&args[1]).filter(|o| *o >= 0) else {
            return Ok(RespValue::error(ERR_BIT_OFFSET));
        };
        let offset = offset as usize;

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::integer(0)),
            Some(meta) if meta.data_type != DataType::String => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let val = store.get_string(key).await?.unwrap_or_default();
                if offset >= 8 * val.len() {
                    return Ok(RespValue::integer(0));
                }
                // Bit 0 is the most significant bit of the first byte.
                let bit = val[offset / 8] >> (7 - offset % 8) & 0x01;
                Ok(RespValue::integer(bit as i64))
            }
        }
    }
}
