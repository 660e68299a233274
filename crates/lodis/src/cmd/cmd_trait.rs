use async_trait::async_trait;
use bytes::Bytes;
use resp::RespValue;

use super::CmdMeta;
use super::Extras;

/// Handler outcome: client-level errors travel in-band as
/// `Ok(RespValue::Error)`, engine failures propagate as `Err` for the
/// session to log and answer generically.
pub type CmdResult = Result<RespValue, Box<dyn std::error::Error + Send + Sync>>;

/// Command trait - all commands must implement this.
#[async_trait]
pub trait Cmd: Send + Sync {
    /// Get command metadata
    fn meta(&self) -> &CmdMeta;

    /// Run the command against the session's selected database.
    ///
    /// `args` excludes the command name. Arity has already been validated
    /// from the table entry; handlers with arity 0 check it themselves.
    async fn apply(&self, ex: &mut Extras, args: &[Bytes]) -> CmdResult;
}
