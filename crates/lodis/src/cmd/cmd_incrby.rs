use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NOT_INTEGER;
use super::Extras;
use super::utils::incr_by;
use super::utils::parse_i64;

pub struct IncrByCmd {
    meta: CmdMeta,
}

impl Default for IncrByCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "incrby",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for IncrByCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(by) = parse_i64(&args[1]) else {
            return Ok(RespValue::error(ERR_NOT_INTEGER));
        };
        incr_by(ex, args[0].clone(), by).await
    }
}
