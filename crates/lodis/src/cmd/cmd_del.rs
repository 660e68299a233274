use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct DelCmd {
    meta: CmdMeta,
}

impl Default for DelCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "del",
                arity: -2,
            },
        }
    }
}

#[async_trait]
impl Cmd for DelCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let db = ex.db.clone();
        let store = db.write().await;

        let mut count = 0;
        for key in args {
            if store.delete(key.clone()).await? {
                count += 1;
            }
        }
        Ok(RespValue::integer(count))
    }
}
