use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NOT_INTEGER;
use super::ERR_OVERFLOW;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::parse_i64;

pub struct HIncrByCmd {
    meta: CmdMeta,
}

impl Default for HIncrByCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hincrby",
                arity: 4,
            },
        }
    }
}

#[async_trait]
impl Cmd for HIncrByCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(by) = parse_i64(&args[2]) else {
            return Ok(RespValue::error(ERR_NOT_INTEGER));
        };
        let key = args[0].clone();
        let field = args[1].clone();

        let db = ex.db.clone();
        let store = db.write().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::Hash
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }

        let values = store
            .get_hash_fields(key.clone(), std::slice::from_ref(&field))
            .await?;
        let current = match &values[0] {
            Some(raw) => match parse_i64(raw) {
                Some(i) => i,
                None => return Ok(RespValue::error(ERR_NOT_INTEGER)),
            },
            None => 0,
        };
        let Some(new_val) = current.checked_add(by) else {
            return Ok(RespValue::error(ERR_OVERFLOW));
        };

        let expire_at = meta.and_then(|m| m.expire_at);
        store
            .put_hash(
                key,
                &[(field, Bytes::from(new_val.to_string()))],
                expire_at,
            )
            .await?;
        Ok(RespValue::integer(new_val))
    }
}
