use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HLenCmd {
    meta: CmdMeta,
}

impl Default for HLenCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hlen",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for HLenCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::integer(0)),
            Some(meta) if meta.data_type != DataType::Hash => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let names = store.get_hash_field_names(key).await?;
                Ok(RespValue::integer(names.len() as i64))
            }
        }
    }
}
