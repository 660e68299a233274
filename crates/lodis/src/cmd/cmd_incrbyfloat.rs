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

pub struct IncrByFloatCmd {
    meta: CmdMeta,
}

impl Default for IncrByFloatCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "incrbyfloat",
                arity: 3,
            },
        }
    }
}

#[async_trait]
impl Cmd for IncrByFloatCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(by) = parse_f64(&args[1]) else {
            return Ok(RespValue::error(ERR_NOT_FLOAT));
        };

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.write().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::String
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }

        let current = match &meta {
            Some(_) => {
                let val = store.get_string(key.clone()).await?.unwrap_or_default();
                match parse_f64(&val) {
                    Some(f) => f,
                    None => return Ok(RespValue::error(ERR_NOT_FLOAT)),
                }
            }
            None => 0.0,
        };

        // Shortest decimal form round-trips without trailing zeros.
        let formatted = Bytes::from((current + by).to_string());
        let expire_at = meta.and_then(|m| m.expire_at);
        store
            .put_string(key, formatted.clone(), expire_at)
            .await?;
        Ok(RespValue::BulkString(Some(formatted)))
    }
}
