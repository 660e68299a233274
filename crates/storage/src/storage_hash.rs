use bytes::Bytes;
use slatedb::WriteBatch;

use crate::hash::field_key::HashFieldKey;
use crate::hash::field_key::field_scan_prefix;
use crate::meta::key::MetaKey;
use crate::meta::value::Metadata;
use crate::data_type::DataType;
use crate::store::Store;

impl Store {
    /// All fields of a hash, in engine key order.
    pub async fn get_hash(
        &self,
        key: Bytes,
    ) -> Result<Vec<(Bytes, Bytes)>, Box<dyn std::error::Error + Send + Sync>> {
        let prefix = field_scan_prefix(&key);
        let mut stream = self.db.scan(prefix.clone()..).await?;
        let mut entries = Vec::new();

        while let Some(kv) = stream.next().await? {
            if !kv.key.starts_with(&prefix) {
                break;
            }
            let field = kv.key.slice(prefix.len()..);
            entries.push((field, kv.value));
        }
        Ok(entries)
    }

    /// Point lookups for the requested fields; absent fields come back as
    /// `None` in the matching slot.
    pub async fn get_hash_fields(
        &self,
        key: Bytes,
        fields: &[Bytes],
    ) -> Result<Vec<Option<Bytes>>, Box<dyn std::error::Error + Send + Sync>> {
        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            let field_key = HashFieldKey::new(key.clone(), field.clone()).encode();
            values.push(self.db.get(field_key).await?);
        }
        Ok(values)
    }

    /// Field names only.
    pub async fn get_hash_field_names(
        &self,
        key: Bytes,
    ) -> Result<Vec<Bytes>, Box<dyn std::error::Error + Send + Sync>> {
        let prefix = field_scan_prefix(&key);
        let mut stream = self.db.scan(prefix.clone()..).await?;
        let mut names = Vec::new();

        while let Some(kv) = stream.next().await? {
            if !kv.key.starts_with(&prefix) {
                break;
            }
            names.push(kv.key.slice(prefix.len()..));
        }
        Ok(names)
    }

    /// Merge fields into a hash: one batch writing the meta entry and every
    /// given field. Fields not named stay untouched; a full replacement is a
    /// `delete` followed by `put_hash`.
    ///
    /// Callers verify beforehand that the key is absent or already a hash.
    pub async fn put_hash(
        &self,
        key: Bytes,
        entries: &[(Bytes, Bytes)],
        expire_at: Option<u64>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut batch = WriteBatch::new();
        batch.put(
            MetaKey::new(key.clone()).encode(),
            Metadata::with_expiry(DataType::Hash, expire_at).encode(),
        );
        for (field, value) in entries {
            batch.put(
                HashFieldKey::new(key.clone(), field.clone()).encode(),
                value.clone(),
            );
        }
        self.db.write(batch).await?;
        Ok(())
    }

    /// Batch-delete the given field entries, then drop the meta entry if the
    /// hash ended up empty.
    pub async fn delete_hash_fields(
        &self,
        key: Bytes,
        fields: &[Bytes],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut batch = WriteBatch::new();
        for field in fields {
            batch.delete(HashFieldKey::new(key.clone(), field.clone()).encode());
        }
        self.db.write(batch).await?;

        if self.get_hash_field_names(key.clone()).await?.is_empty() {
            self.db.delete(MetaKey::new(key).encode()).await?;
        }
        Ok(())
    }
}
