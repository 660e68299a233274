use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct MSetCmd {
    meta: CmdMeta,
}

impl Default for MSetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "mset",
                arity: -3,
            },
        }
    }
}

#[async_trait]
impl Cmd for MSetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        if args.len() % 2 != 0 {
            return Ok(RespValue::error(
                "ERR wrong number of arguments for 'mset' command",
            ));
        }

        let db = ex.db.clone();
        let store = db.write().await;

        for pair in args.chunks_exact(2) {
            store
                .put_string(pair[0].clone(), pair[1].clone(), None)
                .await?;
        }
        Ok(RespValue::simple_string("OK"))
    }
}
