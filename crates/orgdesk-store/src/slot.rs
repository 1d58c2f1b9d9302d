//! Slot store implementations.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use orgdesk_core::error::ConsoleResult;
use orgdesk_core::repository::SlotStore;
use tracing::debug;

use crate::error::StoreError;

/// Slots held in a process-local map.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, slot: &str) -> ConsoleResult<Option<String>> {
        let slots = self.slots.read().map_err(|_| StoreError::Poisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> ConsoleResult<()> {
        let mut slots = self.slots.write().map_err(|_| StoreError::Poisoned)?;
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> ConsoleResult<()> {
        let mut slots = self.slots.write().map_err(|_| StoreError::Poisoned)?;
        slots.remove(slot);
        Ok(())
    }
}

/// Slots persisted as `<dir>/<slot>.json`.
///
/// Writes go to a temporary sibling first and are renamed into place,
/// so a reader never observes a half-written value.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Use `dir` as the slot directory, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, slot: &str) -> Result<PathBuf, StoreError> {
        let valid = !slot.is_empty()
            && !slot.starts_with('.')
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StoreError::InvalidSlot(slot.to_string()));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, slot: &str) -> ConsoleResult<Option<String>> {
        let path = self.path_for(slot)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::from(e).into()),
        }
    }

    fn write(&self, slot: &str, value: &str) -> ConsoleResult<()> {
        let path = self.path_for(slot)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(StoreError::from)?;
        fs::rename(&tmp, &path).map_err(StoreError::from)?;
        debug!(slot, bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&self, slot: &str) -> ConsoleResult<()> {
        let path = self.path_for(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::from(e).into()),
        }
    }
}
