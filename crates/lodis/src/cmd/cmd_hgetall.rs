use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HGetAllCmd {
    meta: CmdMeta,
}

impl Default for HGetAllCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hgetall",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for HGetAllCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::array([])),
            Some(meta) if meta.data_type != DataType::Hash => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let entries = store.get_hash(key).await?;
                let mut flat = Vec::with_capacity(entries.len() * 2);
                for (field, value) in entries {
                    flat.push(RespValue::BulkString(Some(field)));
                    flat.push(RespValue::BulkString(Some(value)));
                }
                Ok(RespValue::array(flat))
            }
        }
    }
}
