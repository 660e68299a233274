use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct ExistsCmd {
    meta: CmdMeta,
}

impl Default for ExistsCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "exists",
                arity: -2,
            },
        }
    }
}

#[async_trait]
impl Cmd for ExistsCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let db = ex.db.clone();
        let store = db.read().await;

        // Repeated keys each count.
        let mut count = 0;
        for key in args {
            if store.metadata(key).await?.is_some() {
                count += 1;
            }
        }
        Ok(RespValue::integer(count))
    }
}
