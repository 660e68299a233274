use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct TypeCmd {
    meta: CmdMeta,
}

impl Default for TypeCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "type",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for TypeCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let db = ex.db.clone();
        let store = db.read().await;

        let name = match store.metadata(&args[0]).await? {
            Some(meta) => meta.data_type.as_str(),
            None => "none",
        };
        Ok(RespValue::simple_string(name))
    }
}
