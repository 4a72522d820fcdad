use crate::core::{ConfigProvider, Document, MovieCount, Storage};
use crate::utils::error::{CountError, Result};

/// Counts the movie records in one JSON file.
///
/// The work is split into `read`, `decode` and `measure` so the engine can
/// log and monitor each phase; `count` runs all three.
pub struct MovieCounter<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MovieCounter<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn input_path(&self) -> &str {
        self.config.input_path()
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Reads the input file as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        let path = self.input_path();
        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path);

        String::from_utf8(bytes).map_err(|source| CountError::Encoding {
            path: path.to_string(),
            source,
        })
    }

    /// Parses the text, skipping over record contents.
    pub fn decode(&self, text: &str) -> Result<Document> {
        serde_json::from_str(text).map_err(|source| CountError::Parse {
            path: self.input_path().to_string(),
            source,
        })
    }

    /// Counts top-level elements. Anything but an array is rejected, objects included.
    pub fn measure(&self, document: Document) -> Result<MovieCount> {
        let found = document.kind();
        let records = document
            .into_records()
            .ok_or_else(|| CountError::TypeMismatch {
                path: self.input_path().to_string(),
                found,
            })?;

        Ok(MovieCount {
            source: self.input_path().to_string(),
            count: records.len(),
        })
    }

    pub fn count(&self) -> Result<MovieCount> {
        let text = self.read()?;
        let document = self.decode(&text)?;
        self.measure(document)
    }
}
