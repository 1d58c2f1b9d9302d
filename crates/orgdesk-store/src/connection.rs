//! Slot store configuration and construction.

use std::path::PathBuf;
use std::sync::Arc;

use orgdesk_core::SimulatedLatency;
use orgdesk_core::repository::SlotStore;
use tracing::info;

use crate::error::StoreError;
use crate::slot::{FileSlotStore, MemorySlotStore};

/// Where slot values live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local, lost on exit.
    Memory,
    /// One JSON file per slot inside `dir`.
    File { dir: PathBuf },
}

/// Configuration for the registry's storage.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Delay applied to every registry operation.
    pub latency: SimulatedLatency,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File {
                dir: PathBuf::from("data"),
            },
            latency: SimulatedLatency::default(),
        }
    }
}

/// Open the slot store described by `config`.
pub fn open_slot_store(config: &StoreConfig) -> Result<Arc<dyn SlotStore>, StoreError> {
    match &config.backend {
        StoreBackend::Memory => {
            info!("Opening in-memory slot store");
            Ok(Arc::new(MemorySlotStore::new()))
        }
        StoreBackend::File { dir } => {
            info!(dir = %dir.display(), "Opening file slot store");
            Ok(Arc::new(FileSlotStore::open(dir)?))
        }
    }
}
