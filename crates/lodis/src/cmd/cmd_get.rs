use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct GetCmd {
    meta: CmdMeta,
}

impl Default for GetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "get",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for GetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::null_bulk()),
            Some(meta) if meta.data_type != DataType::String => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => Ok(RespValue::from(store.get_string(key).await?)),
        }
    }
}
