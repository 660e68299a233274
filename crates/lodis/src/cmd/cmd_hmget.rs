use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HMGetCmd {
    meta: CmdMeta,
}

impl Default for HMGetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hmget",
                arity: -3,
            },
        }
    }
}

#[async_trait]
impl Cmd for HMGetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let fields = &args[1..];

        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::array(
                fields.iter().map(|_| RespValue::null_bulk()),
            )),
            Some(meta) if meta.data_type != DataType::Hash => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let values = store.get_hash_fields(key, fields).await?;
                Ok(RespValue::array(values.into_iter().map(RespValue::from)))
            }
        }
    }
}
