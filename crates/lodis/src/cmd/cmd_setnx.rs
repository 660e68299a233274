use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct SetNxCmd {
    meta: CmdMeta,
}

impl Default for SetNxCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "setnx",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for SetNxCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.write().await;

        if store.metadata(&key).await?.is_some() {
            return Ok(RespValue::integer(0));
        }
        store.put_string(key, args[1].clone(), None).await?;
        Ok(RespValue::integer(1))
    }
}
