//! Per-connection session: read, decode, dispatch, reply.

use std::sync::Arc;

use bytes::BytesMut;
use futures::FutureExt;
use resp::RespEncoder;
use resp::RespParseResult;
use resp::RespParser;
use resp::RespValue;
use storage::Registry;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::debug;
use tracing::error;

use crate::cmd::CmdTable;
use crate::cmd::ERR_SERVER;
use crate::cmd::ERR_WRONG_INPUT;
use crate::cmd::Extras;
use crate::dispatcher::dispatch;

pub struct Session {
    socket: TcpStream,
    parser: RespParser,
    buffer: BytesMut,
    /// Reply bytes for the request in flight; grows to the largest reply the
    /// connection has produced and is reused across requests.
    reply: BytesMut,
    table: Arc<CmdTable>,
    extras: Extras,
}

impl Session {
    pub fn new(
        socket: TcpStream,
        table: Arc<CmdTable>,
        registry: Arc<Registry>,
        require_pass: String,
    ) -> Self {
        Self {
            socket,
            parser: RespParser::new(),
            buffer: BytesMut::with_capacity(4096),
            reply: BytesMut::with_capacity(4096),
            table,
            extras: Extras::new(registry, require_pass),
        }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        loop {
            let n = match self.socket.read_buf(&mut self.buffer).await {
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::ConnectionReset => {
                    debug!("Connection reset by peer");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            if n == 0 {
                // Client closed its end.
                if self.buffer.is_empty() {
                    return Ok(());
                } else {
                    return Err("Connection closed with incomplete data".into());
                }
            }

            loop {
                match self.parser.parse(&mut self.buffer) {
                    RespParseResult::Complete(value) => {
                        self.reply.clear();
                        self.respond(value).await;
                        self.socket.write_all(&self.reply).await?;
                    }
                    RespParseResult::Incomplete => {
                        break;
                    }
                    RespParseResult::Error(e) => {
                        let error_response = RespValue::error(format!("ERR Protocol error: {}", e));
                        self.socket.write_all(&error_response.encode()).await?;
                        return Err(e.into());
                    }
                }
            }
        }
    }

    // Dispatch one decoded value and append the reply to the reply buffer.
    // Handler panics and engine errors both degrade to a generic error reply;
    // the connection stays up either way.
    async fn respond(&mut self, value: RespValue) {
        let RespValue::Array(Some(input)) = value else {
            RespValue::error(ERR_WRONG_INPUT).encode_to(&mut self.reply);
            return;
        };

        let outcome = std::panic::AssertUnwindSafe(dispatch(
            &self.table,
            &mut self.extras,
            input,
        ))
        .catch_unwind()
        .await;

        let reply = match outcome {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                error!("Command failed with engine error: {}", e);
                RespValue::error(ERR_SERVER)
            }
            Err(panic) => {
                let msg = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!("Panic in command handler: {}", msg);
                RespValue::error(ERR_SERVER)
            }
        };
        reply.encode_to(&mut self.reply);
    }
}
