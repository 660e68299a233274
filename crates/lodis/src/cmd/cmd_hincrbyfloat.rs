use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NOT_FLOAT;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::parse_f64;

pub struct HIncrByFloatCmd {
    meta: CmdMeta,
}

impl Default for HIncrByFloatCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hincrbyfloat",
                arity: 4,
            },
        }
    }
}

#[async_trait]
impl Cmd for HIncrByFloatCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(by) = parse_f64(&args[2]) else {
            return Ok(RespValue::error(ERR_NOT_FLOAT));
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
            Some(raw) => match parse_f64(raw) {
                Some(f) => f,
                None => return Ok(RespValue::error(ERR_NOT_FLOAT)),
            },
            None => 0.0,
        };

        let formatted = Bytes::from((current + by).to_string());
        let expire_at = meta.and_then(|m| m.expire_at);
        store
            .put_hash(key, &[(field, formatted.clone())], expire_at)
            .await?;
        Ok(RespValue::BulkString(Some(formatted)))
    }
}
