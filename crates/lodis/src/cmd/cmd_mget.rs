use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;

pub struct MGetCmd {
    meta: CmdMeta,
}

impl Default for MGetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "mget",
                arity: -2,
            },
        }
    }
}

#[async_trait]
impl Cmd for MGetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let db = ex.db.clone();
        let store = db.read().await;

        let mut replies = Vec::with_capacity(args.len());
        for key in args {
            // Absent keys and non-string keys both report nil in their slot.
            let slot = match store.metadata(key).await? {
                Some(meta) if meta.data_type == DataType::String => {
                    RespValue::from(store.get_string(key.clone()).await?)
                }
                _ => RespValue::null_bulk(),
            };
            replies.push(slot);
        }
        Ok(RespValue::array(replies))
    }
}
