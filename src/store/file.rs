use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use super::PredictionStore;
use super::record::{StoreRecord, from_record, to_record};
use crate::errors::{with_read_context, with_write_context};

/// JSON record file holding every player's predictions.
///
/// Writes go through a sibling `.lock` file and an atomic rename so that
/// concurrent submitters never lose each other's updates.
pub struct FileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let lock_path = with_suffix(&path, ".lock");
        Self { path, lock_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or blank file is an empty store
    pub fn load(&self) -> Result<PredictionStore> {
        let Some(record) = self.read_record()? else {
            info!("No predictions at {}, starting empty", self.path.display());
            return Ok(PredictionStore::new());
        };

        let store = from_record(record);
        info!(
            "Loaded predictions for {} players from {}",
            store.len(),
            self.path.display()
        );
        Ok(store)
    }

    pub fn save(&self, store: &PredictionStore) -> Result<()> {
        self.ensure_parent_dir()?;
        self.write_atomic(&to_record(store))?;
        info!("Saved predictions to {}", self.path.display());
        Ok(())
    }

    /// Read-modify-write of the whole store under an exclusive file lock.
    ///
    /// The store is re-read from disk inside the lock, so changes made by
    /// other processes since the caller last loaded are kept.
    pub fn update<F, R>(&self, apply: F) -> Result<(R, PredictionStore)>
    where
        F: FnOnce(&mut PredictionStore) -> R,
    {
        self.ensure_parent_dir()?;
        let lock_file = self.open_lock_file()?;
        let mut lock = fd_lock::RwLock::new(lock_file);
        let _guard = lock
            .write()
            .with_context(|| format!("Failed to lock {}", self.lock_path.display()))?;

        let mut store = self.load()?;
        let outcome = apply(&mut store);
        self.save(&store)?;

        Ok((outcome, store))
    }

    // --- Helper Methods ---

    fn read_record(&self) -> Result<Option<StoreRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = with_read_context(fs::read_to_string(&self.path), &self.path)?;
        if json.trim().is_empty() {
            return Ok(None);
        }

        let record = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse predictions from {:?}. First 200 chars: {}",
                self.path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(record))
    }

    fn write_atomic(&self, record: &StoreRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record).context("Failed to serialize predictions")?;
        let temp_path = with_suffix(&self.path, ".tmp");

        with_write_context(fs::write(&temp_path, json), &temp_path)?;
        with_write_context(fs::rename(&temp_path, &self.path), &self.path)?;
        Ok(())
    }

    fn open_lock_file(&self) -> Result<File> {
        File::options()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.lock_path)
            .with_context(|| format!("Failed to open lock file {}", self.lock_path.display()))
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))
            }
            _ => Ok(()),
        }
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
