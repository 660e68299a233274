use std::path::Path;
use std::sync::Arc;

use slatedb::Db;
use slatedb::object_store::ObjectStore;
use slatedb::object_store::local::LocalFileSystem;
use tokio::sync::RwLock;
use tokio::sync::RwLockReadGuard;
use tokio::sync::RwLockWriteGuard;

/// One open engine instance. The typed operations live in
/// `storage_string.rs` and `storage_hash.rs` impl blocks.
#[derive(Clone)]
pub struct Store {
    pub(crate) db: Arc<Db>,
}

impl Store {
    /// Open an engine backed by the local file system at `path`, creating the
    /// directory if needed.
    pub async fn open(
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        std::fs::create_dir_all(&path)?;
        let object_store: Arc<dyn ObjectStore> = Arc::new(LocalFileSystem::new_with_prefix(path)?);
        let db_path = slatedb::object_store::path::Path::from("/");
        let db = Db::open(db_path, object_store).await?;
        Ok(Self { db: Arc::new(db) })
    }

    pub async fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.db.close().await?;
        Ok(())
    }
}

/// One logical database: an engine plus its reader/writer lock.
///
/// Command handlers hold the guard across their whole body, which makes every
/// command linearizable with respect to the others on the same database.
/// Commands that read and then write acquire the write guard up front; there
/// are no lock upgrades.
pub struct Database {
    store: RwLock<Store>,
}

impl Database {
    pub async fn open(
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            store: RwLock::new(Store::open(path).await?),
        })
    }

    /// Shared access for pure readers.
    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    /// Exclusive access for any command that writes.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}
