/// JSON file implementation of the habit storage interface
///
/// All habits live in a single pretty-printed JSON file that is read whole and
/// overwritten whole. There is no locking and no partial-write protection: a
/// single running instance is expected to own the file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::HabitCollections;
use crate::storage::{migrations, HabitStorage, StorageError};

/// File-backed storage for both habit collections
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage for the given data file
    ///
    /// The file does not need to exist yet; it is created on the first save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitStorage for JsonFileStorage {
    fn load(&self) -> Result<HabitCollections, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No habits file at {}, starting empty", self.path.display());
                return Ok(HabitCollections::default());
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        let document: Value = serde_json::from_reader(BufReader::new(file))?;
        let collections = migrations::collections_from_document(document)?;

        tracing::info!(
            "Loaded {} habits from {}",
            collections.len(),
            self.path.display()
        );
        Ok(collections)
    }

    fn save(&self, collections: &HabitCollections) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, collections)?;
        writer.flush()?;

        tracing::debug!("Saved {} habits to {}", collections.len(), self.path.display());
        Ok(())
    }
}
