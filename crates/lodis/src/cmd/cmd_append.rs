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

pub struct AppendCmd {
    meta: CmdMeta,
}

impl Default for AppendCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "append",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for AppendCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.write().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::String
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }

        let mut val = match &meta {
            Some(_) => store
                .get_string(key.clone())
                .await?
                .unwrap_or_default()
                .to_vec(),
            None => Vec::new(),
        };
        if val.len() + args[1].len() > STRING_LIMIT {
            return Ok(RespValue::error(ERR_STRING_LIMIT));
        }
        val.extend_from_slice(&args[1]);
        let len = val.len();

        let expire_at = meta.and_then(|m| m.expire_at);
        store.put_string(key, Bytes::from(val), expire_at).await?;
        Ok(RespValue::integer(len as i64))
    }
}
