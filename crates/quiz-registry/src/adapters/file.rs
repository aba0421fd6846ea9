//! # File-Backed State Store
//!
//! Durable store for hosts that run without an embedded database. Records
//! live in memory; every mutation stages into a copy of the record set,
//! rewrites a single binary file through a temp-file-then-rename, and only
//! then replaces the live records. A crash mid-write leaves the previous
//! file intact, and a failed save leaves the in-memory view untouched, so
//! readers never observe a write that did not land.

use crate::domain::errors::StoreError;
use crate::ports::outbound::{BatchOperation, StateStore};

/// File-backed state store.
///
/// Suitable for development and light production loads; the whole record
/// set is rewritten on each commit. The live map advances only after the
/// file write succeeds, keeping memory and disk in step even when a save
/// fails mid-transaction.
pub struct FileBackedStateStore {
    data: std::collections::HashMap<Vec<u8>, Vec<u8>>,
    path: std::path::PathBuf,
}

impl FileBackedStateStore {
    /// Open (or create) a store at the given path.
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let data = Self::load_from_file(&path).unwrap_or_default();

        if !data.is_empty() {
            tracing::info!(
                "[qp-registry] 💾 Loaded {} records from {}",
                data.len(),
                path.display()
            );
        } else {
            tracing::info!(
                "[qp-registry] 📁 No existing state file at {}, starting empty",
                path.display()
            );
        }

        Self { data, path }
    }

    fn load_from_file(
        path: &std::path::Path,
    ) -> Option<std::collections::HashMap<Vec<u8>, Vec<u8>>> {
        use std::io::Read;

        let mut file = std::fs::File::open(path).ok()?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).ok()?;

        // Simple binary format: [key_len:u32][key][value_len:u32][value]...
        let mut data = std::collections::HashMap::new();
        let mut cursor = 0;

        while cursor + 4 <= bytes.len() {
            let key_len = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().ok()?) as usize;
            cursor += 4;

            if cursor + key_len > bytes.len() {
                break;
            }
            let key = bytes[cursor..cursor + key_len].to_vec();
            cursor += key_len;

            if cursor + 4 > bytes.len() {
                break;
            }
            let value_len = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().ok()?) as usize;
            cursor += 4;

            if cursor + value_len > bytes.len() {
                break;
            }
            let value = bytes[cursor..cursor + value_len].to_vec();
            cursor += value_len;

            data.insert(key, value);
        }

        Some(data)
    }

    fn save_to_file(
        &self,
        data: &std::collections::HashMap<Vec<u8>, Vec<u8>>,
    ) -> Result<(), StoreError> {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::io)?;
        }

        let mut bytes = Vec::new();
        for (key, value) in data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(StoreError::io)?;
        file.write_all(&bytes).map_err(StoreError::io)?;
        file.sync_all().map_err(StoreError::io)?;

        std::fs::rename(&temp_path, &self.path).map_err(StoreError::io)?;

        Ok(())
    }
}

impl StateStore for FileBackedStateStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        // Stage on a copy; the live map advances only once the save lands.
        let mut staged = self.data.clone();
        staged.insert(key.to_vec(), value.to_vec());
        self.save_to_file(&staged)?;
        self.data = staged;
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        let mut staged = self.data.clone();
        staged.remove(key);
        self.save_to_file(&staged)?;
        self.data = staged;
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(key))
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        let mut staged = self.data.clone();
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    staged.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    staged.remove(&key);
                }
            }
        }
        self.save_to_file(&staged)?;
        self.data = staged;
        Ok(())
    }
}
