use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;
use storage::now_millis;

use super::Cmd;
use super::CmdMeta;
use super::CmdResult;
use super::ERR_NOT_INTEGER;
use super::ERR_STRING_LIMIT;
use super::ERR_SYNTAX;
use super::Extras;
use super::utils::STRING_LIMIT;
use super::utils::parse_i64;

pub struct SetCmd {
    meta: CmdMeta,
}

impl Default for SetCmd {
    fn default() -> Self {
        Self {
            meta: CmdMeta {
                name: "set",
                arity: -3,
            },
        }
    }
}

#[derive(Default)]
struct SetOptions {
    nx: bool,
    xx: bool,
    expire_at: Option<u64>,
}

// SET key value [NX|XX] [EX seconds | PX milliseconds]
fn parse_options(args: &[Bytes]) -> Result<SetOptions, &'static str> {
    let mut opts = SetOptions::default();
    let mut offset = 0;
    while offset < args.len() {
        let option = args[offset].to_ascii_lowercase();
        match option.as_slice() {
            b"nx" => {
                opts.nx = true;
                offset += 1;
            }
            b"xx" => {
                opts.xx = true;
                offset += 1;
            }
            b"ex" | b"px" => {
                let Some(raw) = args.get(offset + 1) else {
                    return Err(ERR_SYNTAX);
                };
                let Some(amount) = parse_i64(raw) else {
                    return Err(ERR_NOT_INTEGER);
                };
                let millis = if option.as_slice() == b"ex" {
                    amount.saturating_mul(1000)
                } else {
                    amount
                };
                opts.expire_at = Some(now_millis().saturating_add_signed(millis));
                offset += 2;
            }
            _ => return Err(ERR_SYNTAX),
        }
    }
    Ok(opts)
}

#[async_trait]
impl Cmd for SetCmd {
    fn meta(&self) -> &CmdMeta {
        &self.meta
    }

    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult {
        let key = args[0].clone();
        let value = args[1].clone();
        if value.len() > STRING_LIMIT {
            return Ok(RespValue::error(ERR_STRING_LIMIT));
        }

        let db = ex.db.clone();
        let store = db.write().await;

        if args.len() == 2 {
            store.put_string(key, value, None).await?;
            return Ok(RespValue::simple_string("OK"));
        }

        let opts = match parse_options(&args[2..]) {
            Ok(opts) => opts,
            Err(msg) => return Ok(RespValue::error(msg)),
        };
        if opts.nx && opts.xx {
            return Ok(RespValue::null_bulk());
        }

        let exists = store.metadata(&key).await?.is_some();
        if opts.nx && exists {
            return Ok(RespValue::null_bulk());
        }
        if opts.xx && !exists {
            return Ok(RespValue::null_bulk());
        }

        store.put_string(key, value, opts.expire_at).await?;
        Ok(RespValue::simple_string("OK"))
    }
}
