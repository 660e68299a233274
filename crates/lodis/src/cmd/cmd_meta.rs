/// Command metadata containing immutable information about a command.
#[derive(Debug, Clone)]
pub struct CmdMeta {
    /// Lowercase command name, the key in the command table.
    pub name: &'static str,
    /// Redis-style arity including the command name itself.
    pub arity: i16,
}

impl CmdMeta {
    /// Validate argument count (including the command name) against arity.
    /// - Positive arity: requires exact match
    /// - Negative arity: requires at least abs(arity) arguments
    /// - Zero: the handler validates its own arity
    pub fn validate_arity(&self, arg_count: usize) -> Result<(), String> {
        let ok = if self.arity > 0 {
            arg_count == self.arity as usize
        } else if self.arity < 0 {
            arg_count >= (-self.arity) as usize
        } else {
            true
        };

        if ok {
            Ok(())
        } else {
            Err(format!(
                "ERR wrong number of arguments for '{}' command",
                self.name
            ))
        }
    }
}
