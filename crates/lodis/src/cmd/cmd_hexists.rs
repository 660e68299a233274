use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HExistsCmd {
    meta: CmdMeta,
}

impl Default for HExistsCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hexists",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for HExistsCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let field = args[1].clone();

        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::integer(0)),
            Some(meta) if meta.data_type != DataType::Hash => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let values = store.get_hash_fields(key, &[field]).await?;
                Ok(RespValue::integer(if values[0].is_some() { 1 } else { 0 }))
            }
        }
    }
}
