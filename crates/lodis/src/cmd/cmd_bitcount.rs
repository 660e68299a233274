use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NOT_INTEGER;
use super::ERR_SYNTAX;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::calc_range;
use super::utils::parse_i64;
use super::utils::range_slice;

pub struct BitCountCmd {
    meta: CmdMeta,
}

impl Default for BitCountCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "bitcount",
                arity: -2,
            },
        }
    }
}

#[async_trait]
impl Cmd for BitCountCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    // BITCOUNT key [start end]
    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        if args.len() != 1 && args.len() != 3 {
            return Ok(RespValue::error(ERR_SYNTAX));
        }

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        let val = match store.metadata(&key).await? {
            None => return Ok(RespValue::integer(0)),
            Some(meta) if meta.data_type != DataType::String => {
                return Ok(RespValue::error(ERR_WRONG_TYPE));
            }
            Some(_) => store.get_string(key).await?.unwrap_or_default(),
        };

        let (start, end) = if args.len() == 3 {
            let (Some(start), Some(end)) = (parse_i64(&args[1]), parse_i64(&args[2])) else {
                return Ok(RespValue::error(ERR_NOT_INTEGER));
            };
            calc_range(start, end, val.len())
        } else {
            (0, val.len())
        };

        let sum: u32 = range_slice(&val, start, end)
            .iter()
            .map(|b| b.count_ones())
            .sum();
        Ok(RespValue::integer(sum as i64))
    }
}
