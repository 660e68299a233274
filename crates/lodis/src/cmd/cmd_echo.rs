use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct EchoCmd {
    meta: CmdMeta,
}

impl Default for EchoCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "echo",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for EchoCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, _ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        Ok(RespValue::BulkString(Some(args[0].clone())))
    }
}
