use std::sync::Arc;

use storage::Database;
use storage::Registry;

/// Per-connection state handed to every command handler.
pub struct Extras {
    pub registry: Arc<Registry>,
    /// The currently selected database; SELECT swaps this pointer.
    pub db: Arc<Database>,
    /// Cleared on a failed AUTH, set on a successful one. Starts true when
    /// no password is configured.
    pub authed: bool,
    pub require_pass: String,
}

impl Extras {
    pub fn new(registry: Arc<Registry>, require_pass: String) -> Self {
        let db = registry.default_database();
        let authed = require_pass.is_empty();
        Self {
            registry,
            db,
            authed,
            require_pass,
        }
    }
}
