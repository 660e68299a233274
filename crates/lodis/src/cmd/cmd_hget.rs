use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HGetCmd {
    meta: CmdMeta,
}

impl Default for HGetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hget",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for HGetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let field = args[1].clone();

        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::null_bulk()),
            Some(meta) if meta.data_type != DataType::Hash => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let mut values = store.get_hash_fields(key, &[field]).await?;
                Ok(RespValue::from(values.remove(0)))
            }
        }
    }
}
