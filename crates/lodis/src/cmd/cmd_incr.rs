use async_trait::async_trait;
use bytes::Bytes;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::Extras;
use super::utils::incr_by;

pub struct IncrCmd {
    meta: CmdMeta,
}

impl Default for IncrCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "incr",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for IncrCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        incr_by(ex, args[0].clone(), 1).await
    }
}
