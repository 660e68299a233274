mod cmd_meta;
mod cmd_trait;
mod extras;
mod table;
pub mod utils;

pub use cmd_meta::CmdMeta;
pub use cmd_trait::Cmd;
pub use cmd_trait::CmdResult;
pub use extras::Extras;
pub use table::CmdTable;

mod cmd_auth;
mod cmd_echo;
mod cmd_flushdb;
mod cmd_ping;
mod cmd_select;

mod cmd_del;
mod cmd_exists;
mod cmd_type;

mod cmd_append;
mod cmd_bitcount;
mod cmd_bitop;
mod cmd_bitpos;
mod cmd_decr;
mod cmd_decrby;
mod cmd_get;
mod cmd_getbit;
mod cmd_getrange;
mod cmd_getset;
mod cmd_incr;
mod cmd_incrby;
mod cmd_incrbyfloat;
mod cmd_mget;
mod cmd_mset;
mod cmd_msetnx;
mod cmd_set;
mod cmd_setbit;
mod cmd_setnx;
mod cmd_setrange;
mod cmd_strlen;

mod cmd_hdel;
mod cmd_hexists;
mod cmd_hget;
mod cmd_hgetall;
mod cmd_hincrby;
mod cmd_hincrbyfloat;
mod cmd_hkeys;
mod cmd_hlen;
mod cmd_hmget;
mod cmd_hmset;
mod cmd_hset;
mod cmd_hsetnx;
mod cmd_hstrlen;
mod cmd_hvals;

// Client-level error replies. These go to the socket in-band as RESP errors;
// the connection stays up.
pub const ERR_NO_COMMAND: &str = "ERR no command";
pub const ERR_WRONG_INPUT: &str = "ERR wrong input format";
pub const ERR_SYNTAX: &str = "ERR syntax error";
pub const ERR_WRONG_TYPE: &str =
    "WRONGTYPE Operation against a key holding the wrong kind of value";
pub const ERR_NOT_INTEGER: &str = "ERR value is not an integer or out of range";
pub const ERR_NOT_FLOAT: &str = "ERR value is not a valid float";
pub const ERR_OVERFLOW: &str = "ERR increment or decrement would overflow";
pub const ERR_STRING_LIMIT: &str = "ERR string exceeds maximum allowed size (512MB)";
pub const ERR_OFFSET_RANGE: &str = "ERR offset is out of range";
pub const ERR_BIT_OFFSET: &str = "ERR bit offset is not an integer or out of range";
pub const ERR_BIT_VALUE: &str = "ERR bit is not an integer or out of range";
pub const ERR_BIT_ARG: &str = "ERR The bit argument must be 1 or 0.";
pub const ERR_BITOP_NOT: &str = "ERR BITOP NOT must be called with a single source key.";
pub const ERR_INVALID_DB_INDEX: &str = "ERR invalid DB index";
pub const ERR_NO_PASSWORD: &str = "ERR Client sent AUTH, but no password is set";
pub const ERR_WRONG_PASSWORD: &str = "ERR invalid password";
pub const NOAUTH: &str = "NOAUTH Authentication required.";
pub const ERR_SERVER: &str = "ERR server unknown error";
