use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct FlushDbCmd {
    meta: CmdMeta,
}

impl Default for FlushDbCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "flushdb",
                arity: 1,
            },
        }
    }
}

#[async_trait]
impl Cmd for FlushDbCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, _args: &[Bytes]) -> CmdResult {
        let db = ex.db.clone();
        let store = db.write().await;
        store.flush().await?;
        Ok(RespValue::simple_string("OK"))
    }
}
