//! Table-driven request dispatch.

use bytes::Bytes;
use resp::RespValue;
use tracing::debug;

use crate::cmd::CmdTable;
use crate::cmd::ERR_NO_COMMAND;
use crate::cmd::ERR_WRONG_INPUT;
use crate::cmd::Extras;
use crate::cmd::NOAUTH;

/// Run one decoded command array against the session's state.
///
/// Client-level failures (unknown command, bad arity, missing auth, handler
/// syntax errors) come back as `Ok(RespValue::Error)` and are written in-band;
/// an `Err` means the engine failed and the session answers generically.
pub async fn dispatch(
    table: &CmdTable,
    ex: &mut Extras,
    input: Vec<RespValue>,
) -> Result<RespValue, Box<dyn std::error::Error + Send + Sync>> {
    if input.is_empty() {
        return Ok(RespValue::error(ERR_NO_COMMAND));
    }

    let mut args: Vec<Bytes> = Vec::with_capacity(input.len());
    for value in input {
        match value {
            RespValue::BulkString(Some(b)) | RespValue::SimpleString(b) => args.push(b),
            _ => return Ok(RespValue::error(ERR_WRONG_INPUT)),
        }
    }

    let name = String::from_utf8_lossy(&args[0]).to_lowercase();
    debug!(command = %name, argc = args.len(), "dispatching");

    let Some(cmd) = table.get(&name) else {
        return Ok(RespValue::error(format!("ERR unknown command '{}'", name)));
    };

    if let Err(msg) = cmd.meta().validate_arity(args.len()) {
        return Ok(RespValue::error(msg));
    }

    if !ex.authed && !ex.require_pass.is_empty() && name != "auth" {
        return Ok(RespValue::error(NOAUTH));
    }

    cmd.apply(ex, &args[1..]).await
}
