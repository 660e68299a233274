use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NOT_INTEGER;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::calc_range;
use super::utils::parse_i64;
use super::utils::range_slice;

pub struct GetRangeCmd {
    meta: CmdMeta,
}

impl Default for GetRangeCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "getrange",
                arity: 4,
            },
        }
    }
}

#[async_trait]
impl Cmd for GetRangeCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let (Some(start), Some(end)) = (parse_i64(&args[1]), parse_i64(&args[2])) else {
            return Ok(RespValue::error(ERR_NOT_INTEGER));
        };

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::bulk_string(Bytes::new())),
            Some(meta) if meta.data_type != DataType::String => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let val = store.get_string(key).await?.unwrap_or_default();
                let (start, end) = calc_range(start, end, val.len());
                Ok(RespValue::bulk_string(Bytes::copy_from_slice(
                    range_slice(&val, start, end),
                )))
            }
        }
    }
}
