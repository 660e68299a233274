use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HStrlenCmd {
    meta: CmdMeta,
}

impl Default for HStrlenCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hstrlen",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for HStrlenCmd {
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
                let len = values[0].as_ref().map_or(0, |v| v.len());
                Ok(RespValue::integer(len as i64))
            }
        }
    }
}
