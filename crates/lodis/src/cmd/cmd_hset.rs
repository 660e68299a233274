use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HSetCmd {
    meta: CmdMeta,
}

impl Default for HSetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hset",
                arity: 4,
            },
        }
    }
}

#[async_trait]
impl Cmd for HSetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let field = args[1].clone();
        let value = args[2].clone();

        let db = ex.db.clone();
        let store = db.write().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::Hash
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }

        let existing = store
            .get_hash_fields(key.clone(), std::slice::from_ref(&field))
            .await?;
        let is_new = existing[0].is_none();

        let expire_at = meta.and_then(|m| m.expire_at);
        store
            .put_hash(key, &[(field, value)], expire_at)
            .await?;
        Ok(RespValue::integer(if is_new { 1 } else { 0 }))
    }
}
