use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct PingCmd {
    meta: CmdMeta,
}

impl Default for PingCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "ping",
                arity: 1,
            },
        }
    }
}

#[async_trait]
impl Cmd for PingCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, _ex: &mut Extras, _args: &[Bytes]) -> CmdResult {
        Ok(RespValue::simple_string("PONG"))
    }
}
