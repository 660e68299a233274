use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_STRING_LIMIT;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::STRING_LIMIT;

pub struct GetSetCmd {
    meta: CmdMeta,
}

impl Default for GetSetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "getset",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for GetSetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        if args[1].len() > STRING_LIMIT {
            return Ok(RespValue::error(ERR_STRING_LIMIT));
        }

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.write().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::String
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }

        let old = match &meta {
            Some(_) => store.get_string(key.clone()).await?,
            None => None,
        };
        // GETSET drops any expiry the key carried.
        store.put_string(key, args[1].clone(), None).await?;
        Ok(RespValue::from(old))
    }
}
