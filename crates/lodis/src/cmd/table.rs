use std::collections::HashMap;
use std::sync::Arc;

use super::Cmd;
use super::cmd_append::AppendCmd;
use super::cmd_auth::AuthCmd;
use super::cmd_bitcount::BitCountCmd;
use super::cmd_bitop::BitOpCmd;
use super::cmd_bitpos::BitPosCmd;
use super::cmd_decr::DecrCmd;
use super::cmd_decrby::DecrByCmd;
use super::cmd_del::DelCmd;
use super::cmd_echo::EchoCmd;
use super::cmd_exists::ExistsCmd;
use super::cmd_flushdb::FlushDbCmd;
use super::cmd_get::GetCmd;
use super::cmd_getbit::GetBitCmd;
use super::cmd_getrange::GetRangeCmd;
use super::cmd_getset::GetSetCmd;
use super::cmd_hdel::HDelCmd;
use super::cmd_hexists::HExistsCmd;
use super::cmd_hget::HGetCmd;
use super::cmd_hgetall::HGetAllCmd;
use super::cmd_hincrby::HIncrByCmd;
use super::cmd_hincrbyfloat::HIncrByFloatCmd;
use super::cmd_hkeys::HKeysCmd;
use super::cmd_hlen::HLenCmd;
use super::cmd_hmget::HMGetCmd;
use super::cmd_hmset::HMSetCmd;
use super::cmd_hset::HSetCmd;
use super::cmd_hsetnx::HSetNxCmd;
use super::cmd_hstrlen::HStrlenCmd;
use super::cmd_hvals::HValsCmd;
use super::cmd_incr::IncrCmd;
use super::cmd_incrby::IncrByCmd;
use super::cmd_incrbyfloat::IncrByFloatCmd;
use super::cmd_mget::MGetCmd;
use super::cmd_mset::MSetCmd;
use super::cmd_msetnx::MSetNxCmd;
use super::cmd_ping::PingCmd;
use super::cmd_select::SelectCmd;
use super::cmd_set::SetCmd;
use super::cmd_setbit::SetBitCmd;
use super::cmd_setnx::SetNxCmd;
use super::cmd_setrange::SetRangeCmd;
use super::cmd_strlen::StrlenCmd;
use super::cmd_type::TypeCmd;

/// Immutable map from lowercase command name to handler. Each handler carries
/// its own metadata, so arity checks stay table-driven.
pub struct CmdTable {
    inner: HashMap<&'static str, Arc<dyn Cmd>>,
}

impl Default for CmdTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CmdTable {
    pub fn new() -> Self {
        let cmds: Vec<Arc<dyn Cmd>> = vec![
            // connection
            Arc::new(AuthCmd::default()),
            Arc::new(EchoCmd::default()),
            Arc::new(PingCmd::default()),
            Arc::new(SelectCmd::default()),
            Arc::new(FlushDbCmd::default()),
            // keys
            Arc::new(DelCmd::default()),
            Arc::new(ExistsCmd::default()),
            Arc::new(TypeCmd::default()),
            // strings
            Arc::new(SetCmd::default()),
            Arc::new(GetCmd::default()),
            Arc::new(AppendCmd::default()),
            Arc::new(GetRangeCmd::default()),
            Arc::new(SetRangeCmd::default()),
            Arc::new(StrlenCmd::default()),
            Arc::new(SetNxCmd::default()),
            Arc::new(GetSetCmd::default()),
            Arc::new(MGetCmd::default()),
            Arc::new(MSetCmd::default()),
            Arc::new(MSetNxCmd::default()),
            Arc::new(IncrCmd::default()),
            Arc::new(DecrCmd::default()),
            Arc::new(IncrByCmd::default()),
            Arc::new(DecrByCmd::default()),
            Arc::new(IncrByFloatCmd::default()),
            Arc::new(GetBitCmd::default()),
            Arc::new(SetBitCmd::default()),
            Arc::new(BitCountCmd::default()),
            Arc::new(BitOpCmd::default()),
            Arc::new(BitPosCmd::default()),
            // hashes
            Arc::new(HSetCmd::default()),
            Arc::new(HSetNxCmd::default()),
            Arc::new(HMSetCmd::default()),
            Arc::new(HGetCmd::default()),
            Arc::new(HMGetCmd::default()),
            Arc::new(HGetAllCmd::default()),
            Arc::new(HKeysCmd::default()),
            Arc::new(HValsCmd::default()),
            Arc::new(HLenCmd::default()),
            Arc::new(HStrlenCmd::default()),
            Arc::new(HExistsCmd::default()),
            Arc::new(HDelCmd::default()),
            Arc::new(HIncrByCmd::default()),
            Arc::new(HIncrByFloatCmd::default()),
        ];

        let mut inner = HashMap::with_capacity(cmds.len());
        for cmd in cmds {
            inner.insert(cmd.meta().name, cmd);
        }
        Self { inner }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Cmd>> {
        self.inner.get(name)
    }
}
