use std::path::Path;
use std::sync::Arc;

use crate::store::Database;

/// Number of logical databases, selectable with `SELECT 0..=15`.
pub const DATABASE_COUNT: usize = 16;

/// The fixed set of databases, each an independent engine rooted at
/// `<base>/<index>/`. All engines are opened eagerly at startup and closed
/// eagerly at shutdown.
pub struct Registry {
    databases: Vec<Arc<Database>>,
}

impl Registry {
    pub async fn open(
        base: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut databases = Vec::with_capacity(DATABASE_COUNT);
        for index in 0..DATABASE_COUNT {
            let path = base.as_ref().join(index.to_string());
            databases.push(Arc::new(Database::open(path).await?));
        }
        Ok(Self { databases })
    }

    /// The database at `index`, or `None` outside 0..=15.
    pub fn select(&self, index: usize) -> Option<Arc<Database>> {
        self.databases.get(index).cloned()
    }

    /// Database 0, the one every new connection starts on.
    pub fn default_database(&self) -> Arc<Database> {
        self.databases[0].clone()
    }

    pub async fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for database in &self.databases {
            database.read().await.close().await?;
        }
        Ok(())
    }
}
