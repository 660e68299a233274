use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::DataType;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_BITOP_NOT;
use super::ERR_SYNTAX;
use super::ERR_WRONG_TYPE;
use super::Extras;

pub struct BitOpCmd {
    meta: CmdMeta,
}

impl Default for BitOpCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "bitop",
                arity: -4,
            },
        }
    }
}

#[async_trait]
impl Cmd for BitOpCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    // BITOP AND|OR|XOR|NOT destkey srckey [srckey ...]
    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let op = args[0].to_ascii_lowercase();
        let dest = args[1].clone();

        let db = ex.db.clone();
        let store = db.write().await;

        match op.as_slice() {
            b"not" => {
                if args.len() > 3 {
                    return Ok(RespValue::error(ERR_BITOP_NOT));
                }
                let src = args[2].clone();
                let val = match store.metadata(&src).await? {
                    None => return Ok(RespValue::integer(0)),
                    Some(meta) if meta.data_type != DataType::String => {
                        return Ok(RespValue::error(ERR_WRONG_TYPE));
                    }
                    Some(_) => store.get_string(src).await?.unwrap_or_default(),
                };

                let flipped: Vec<u8> = val.iter().map(|b| !b).collect();
                let len = flipped.len();
                store.put_string(dest, Bytes::from(flipped), None).await?;
                Ok(RespValue::integer(len as i64))
            }
            b"and" | b"or" | b"xor" => {
                let mut result: Vec<u8> = Vec::new();
                for src in &args[2..] {
                    // Any existing operand that is not a string is a type
                    // error; absent operands read as all-zero bytes.
                    let val = match store.metadata(src).await? {
                        None => None,
                        Some(meta) if meta.data_type != DataType::String => {
                            return Ok(RespValue::error(ERR_WRONG_TYPE));
                        }
                        Some(_) => store.get_string(src.clone()).await?,
                    };
                    let exists = val.is_some();
                    let val = val.unwrap_or_default();

                    if exists && result.len() < val.len() {
                        if result.is_empty() {
                            result.extend_from_slice(&val);
                            continue;
                        }
                        result.resize(val.len(), 0);
                    }
                    for (i, slot) in result.iter_mut().enumerate() {
                        let s = if exists && i < val.len() { val[i] } else { 0 };
                        match op.as_slice() {
                            b"and" => *slot &= s,
                            b"or" => *slot |= s,
                            _ => *slot ^= s,
                        }
                    }
                }

                let len = result.len();
                store.put_string(dest, Bytes::from(result), None).await?;
                Ok(RespValue::integer(len as i64))
            }
            _ => Ok(RespValue::error(ERR_SYNTAX)),
        }
    }
}
