use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct StrlenCmd {
    meta: CmdMeta,
}

impl Default for StrlenCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "strlen",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for StrlenCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.read().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::integer(0)),
            Some(meta) if meta.data_type != DataType::String => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                let len = store.get_string(key).await?.map_or(0, |v| v.len());
                Ok(RespValue::integer(len as i64))
            }
        }
    }
}
