use crate::domain::ports::Storage;
use crate::utils::error::{CountError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());

        fs::read(&full_path).map_err(|source| CountError::FileAccess {
            path: path.to_string(),
            source,
        })
    }
}
