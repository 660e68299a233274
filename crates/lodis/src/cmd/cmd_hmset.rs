use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HMSetCmd {
    meta: CmdMeta,
}

impl Default for HMSetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hmset",
                arity: -4,
            },
        }
    }
}

#[async_trait]
impl Cmd for HMSetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    // HMSET key field value [field value ...]
    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        if args.len() % 2 != 1 {
            return Ok(RespValue::error(
                "ERR wrong number of arguments for 'hmset' command",
            ));
        }

        let key = args[0].clone();
        let db = ex.db.clone();
        let store = db.write().await;

        let meta = store.metadata(&key).await?;
        if let Some(meta) = &meta
            && meta.data_type != DataType::Hash
        {
            return Ok(RespValue::error(ERR_WRONG_TYPE));
        }

        let entries: Vec<(Bytes, Bytes)> = args[1..]
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect();

        let expire_at = meta.and_then(|m| m.expire_at);
        store.put_hash(key, &entries, expire_at).await?;
        Ok(RespValue::simple_string("OK"))
    }
}
