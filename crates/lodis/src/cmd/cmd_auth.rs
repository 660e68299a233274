use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NO_PASSWORD;
use super::ERR_WRONG_PASSWORD;
use super::Extras;

pub struct AuthCmd {
    meta: CmdMeta,
}

impl Default for AuthCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "auth",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for AuthCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        if ex.require_pass.is_empty() {
            return Ok(RespValue::error(ERR_NO_PASSWORD));
        }
        if args[0] != ex.require_pass.as_bytes() {
            ex.authed = false;
            return Ok(RespValue::error(ERR_WRONG_PASSWORD));
        }
        ex.authed = true;
        Ok(RespValue::simple_string("OK"))
    }
}
