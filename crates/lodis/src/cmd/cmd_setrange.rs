use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NOT_INTEGER;
use super::ERR_OFFSET_RANGE;
use super::ERR_STRING_LIMIT;
use super::ERR_WRONG_TYPE;
use super::Extras;
use super::utils::STRING_LIMIT;
use super::utils::parse_i64;

pub struct SetRangeCmd {
    meta: CmdMeta,
}

impl Default for SetRangeCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "setrange",
                arity: 4,
            },
        }
    }
}

#[async_trait]
impl Cmd for SetRangeCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(offset) = parse_i64(&args[1]) else {
            return Ok(RespValue::error(ERR_NOT_INTEGER));
        };
        if offset < 0 {
            return Ok(RespValue::error(ERR_OFFSET_RANGE));
        }
        let offset = offset as usize;
        let patch = &args[2];
        if offset + patch.len() > STRING_LIMIT {
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

        let mut val = match &meta {
            Some(_) => store
                .get_string(key.clone())
                .await?
                .unwrap_or_default()
                .to_vec(),
            None => Vec::new(),
        };
        if val.len() < offset + patch.len() {
            val.resize(offset + patch.len(), 0);
        }
        val[offset..offset + patch.len()].copy_from_slice(patch);
        let len = val.len();

        let expire_at = meta.and_then(|m| m.expire_at);
        store.put_string(key, Bytes::from(val), expire_at).await?;
        Ok(RespValue::integer(len as i64))
    }
}
