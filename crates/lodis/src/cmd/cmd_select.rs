use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_INVALID_DB_INDEX;
use super::Extras;
use super::utils::parse_i64;

pub struct SelectCmd {
    meta: CmdMeta,
}

impl Default for SelectCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "select",
                arity: 2,
            },
        }
    }
}

#[async_trait]
impl Cmd for SelectCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let Some(index) = parse_i64(&args[0]).filter(|i| *i >= 0) else {
            return Ok(RespValue::error(ERR_INVALID_DB_INDEX));
        };
        match ex.registry.select(index as usize) {
            Some(db) => {
                ex.db = db;
                Ok(RespValue::simple_string("OK"))
            }
            None => Ok(RespValue::error(ERR_INVALID_DB_INDEX)),
        }
    }
}
