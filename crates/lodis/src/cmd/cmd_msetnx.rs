use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct MSetNxCmd {
    meta: CmdMeta,
}

impl Default for MSetNxCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "msetnx",
                arity: -3,
            },
        }
    }
}

#[async_trait]
impl Cmd for MSetNxCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        if args.len() % 2 != 0 {
            return Ok(RespValue::error(
                "ERR wrong number of arguments for 'msetnx' command",
            ));
        }

        let db = ex.db.clone();
        let store = db.write().await;

        // All-or-nothing: one existing key means no writes at all.
        for pair in args.chunks_exact(2) {
            if store.metadata(&pair[0]).await?.is_some() {
                return Ok(RespValue::integer(0));
            }
        }
        for pair in args.chunks_exact(2) {
            store
                .put_string(pair[0].clone(), pair[1].clone(), None)
                .await?;
        }
        Ok(RespValue::integer(1))
    }
}
