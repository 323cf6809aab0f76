use crate::domain::errors::StoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File-backed key-value store.
///
/// Keeps the working set in memory and snapshots it to a single binary file
/// after every mutation. The snapshot is written to a temp file and renamed
/// into place, so a crash leaves either the old file or the new one, never a
/// torn mix. Suitable for development and light production.
pub struct FileBackedKVStore {
    data: HashMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at the given path, loading any existing snapshot.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = Self::load_from_file(&path).unwrap_or_default();

        if data.is_empty() {
            tracing::info!(path = %path.display(), "storage file empty or not found");
        } else {
            tracing::info!(
                path = %path.display(),
                keys = data.len(),
                "loaded existing storage file"
            );
        }

        Self { data, path }
    }

    fn load_from_file(path: &Path) -> Option<HashMap<Vec<u8>, Vec<u8>>> {
        use std::io::Read;

        let mut file = std::fs::File::open(path).ok()?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).ok()?;

        // Simple binary format: [key_len:u32][key][value_len:u32][value]...
        let mut data = HashMap::new();
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

    fn save_to_file(&self) -> Result<(), StoreError> {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                message: e.to_string(),
            })?;
        }

        let mut bytes = Vec::new();
        for (key, value) in &self.data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.data.insert(key.to_vec(), value.to_vec());
        self.save_to_file()
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.data.remove(key);
        self.save_to_file()
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    self.data.remove(&key);
                }
            }
        }
        self.save_to_file()
    }

    fn exists(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, StoreError> {
        let results: Vec<_> = self
            .data
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(results)
    }
}
