use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct HDelCmd {
    meta: CmdMeta,
}

impl Default for HDelCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "hdel",
                arity: -3,
            },
        }
    }
}

#[async_trait]
impl Cmd for HDelCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();

        let db = ex.db.clone();
        let store = db.write().await;

        match store.metadata(&key).await? {
            None => Ok(RespValue::integer(0)),
            Some(meta) if meta.data_type != DataType::Hash => {
                Ok(RespValue::error(ERR_WRONG_TYPE))
            }
            Some(_) => {
                // Deduplicate so a field named twice counts once; the reply
                // is the number of fields that actually existed.
                let mut fields: Vec<Bytes> = Vec::with_capacity(args.len() - 1);
                for field in &args[1..] {
                    if !fields.contains(field) {
                        fields.push(field.clone());
                    }
                }

                let existing = store.get_hash_fields(key.clone(), &fields).await?;
                let deleted = existing.iter().filter(|v| v.is_some()).count();

                store.delete_hash_fields(key, &fields).await?;
                Ok(RespValue::integer(deleted as i64))
            }
        }
    }
}
