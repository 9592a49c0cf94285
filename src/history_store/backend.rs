//! Storage backends: a single key-value slot holding the serialized history

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::utils::validate_file_size;

pub const HISTORY_FILENAME: &str = "search-history.json";

/// One slot of persisted text. `None` means nothing has been stored yet.
pub trait StorageBackend {
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, payload: &str) -> Result<()>;
    fn remove(&self) -> Result<()>;
}

/// JSON file in the data directory, written atomically
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend storing `search-history.json` inside `data_dir`
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join(HISTORY_FILENAME) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open history file: {}", self.path.display()))?;

        // An oversized file is treated like a corrupt one: ignored, not fatal
        if let Err(e) = validate_file_size(&file, &self.path) {
            warn!("Ignoring history file: {}", e);
            return Ok(None);
        }

        let mut contents = String::new();
        if let Err(e) = file.read_to_string(&mut contents) {
            warn!("History file is not valid UTF-8, ignoring it: {}", e);
            return Ok(None);
        }

        Ok(Some(contents))
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        // temp file + rename so readers never see a partial write
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, payload).context("Failed to write history temp file")?;
        fs::rename(&temp, &self.path).context("Failed to rename history temp file")?;

        Ok(())
    }

    fn remove(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove history file: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

/// In-process backend for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-loaded with a raw payload (which may be malformed)
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self { slot: RefCell::new(Some(payload.into())) }
    }

    /// Current raw payload
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
