use bytes::Bytes;
use slatedb::WriteBatch;

use crate::data_type::DataType;
use crate::hash::field_key::field_scan_prefix;
use crate::meta::key::MetaKey;
use crate::meta::value::Metadata;
use crate::store::Store;
use crate::string::key::StringValueKey;

impl Store {
    /// Look up a key's meta entry, applying lazy expiry: once the stored
    /// instant has passed, the key's physical entries are removed and the key
    /// reports absent.
    pub async fn metadata(
        &self,
        key: &Bytes,
    ) -> Result<Option<Metadata>, Box<dyn std::error::Error + Send + Sync>> {
        let meta_key = MetaKey::new(key.clone()).encode();
        let Some(raw) = self.db.get(meta_key).await? else {
            return Ok(None);
        };

        let meta = Metadata::decode(&raw)?;
        if meta.is_expired() {
            self.delete(key.clone()).await?;
            return Ok(None);
        }
        Ok(Some(meta))
    }

    /// Point lookup on a string value entry.
    ///
    /// Callers check the key's type via [`Store::metadata`] first; this reads
    /// the value entry only.
    pub async fn get_string(
        &self,
        key: Bytes,
    ) -> Result<Option<Bytes>, Box<dyn std::error::Error + Send + Sync>> {
        let value_key = StringValueKey::new(key).encode();
        Ok(self.db.get(value_key).await?)
    }

    /// Store a string value, replacing whatever the key held before.
    ///
    /// A type transition deletes all prior value entries in the same batch
    /// that writes the new meta and value, so no partial state is ever
    /// visible.
    pub async fn put_string(
        &self,
        key: Bytes,
        value: Bytes,
        expire_at: Option<u64>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut batch = WriteBatch::new();
        if let Some(meta) = self.metadata(&key).await?
            && meta.data_type != DataType::String
        {
            self.stage_value_deletes(&key, meta.data_type, &mut batch)
                .await?;
        }

        batch.put(
            MetaKey::new(key.clone()).encode(),
            Metadata::with_expiry(DataType::String, expire_at).encode(),
        );
        batch.put(StringValueKey::new(key).encode(), value);
        self.db.write(batch).await?;
        Ok(())
    }

    /// Remove a logical key: the meta entry and every value entry, in one
    /// batch. Returns whether the key existed.
    pub async fn delete(
        &self,
        key: Bytes,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let meta_key = MetaKey::new(key.clone()).encode();
        let Some(raw) = self.db.get(meta_key.clone()).await? else {
            return Ok(false);
        };
        let meta = Metadata::decode(&raw)?;

        let mut batch = WriteBatch::new();
        batch.delete(meta_key);
        self.stage_value_deletes(&key, meta.data_type, &mut batch)
            .await?;
        self.db.write(batch).await?;
        Ok(true)
    }

    /// Remove every entry in this database.
    pub async fn flush(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut batch = WriteBatch::new();
        let mut stream = self.db.scan(Bytes::new()..).await?;
        while let Some(kv) = stream.next().await? {
            batch.delete(kv.key);
        }
        self.db.write(batch).await?;
        Ok(())
    }

    // Stage deletion of a key's value entries into `batch`: the single value
    // entry for a string, one per field for a hash.
    pub(crate) async fn stage_value_deletes(
        &self,
        key: &Bytes,
        data_type: DataType,
        batch: &mut WriteBatch,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match data_type {
            DataType::String => {
                batch.delete(StringValueKey::new(key.clone()).encode());
            }
            DataType::Hash => {
                let prefix = field_scan_prefix(key);
                let mut stream = self.db.scan(prefix.clone()..).await?;
                while let Some(kv) = stream.next().await? {
                    if !kv.key.starts_with(&prefix) {
                        break;
                    }
                    batch.delete(kv.key);
                }
            }
            // List, set and sorted set tags never materialize value entries.
            _ => {}
        }
        Ok(())
    }
}
