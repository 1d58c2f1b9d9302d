//! orgdesk Store — slot storage backends and the organization registry.
//!
//! This crate provides:
//! - Slot storage ([`MemorySlotStore`], [`FileSlotStore`]) behind the
//!   core `SlotStore` trait
//! - Store configuration ([`StoreConfig`], [`open_slot_store`])
//! - The seed set written on first access ([`seed_organizations`])
//! - The registry itself ([`repository::SlotOrganizationRepository`])
//! - Error types ([`StoreError`])

mod connection;
mod error;
mod seed;
mod slot;

pub mod repository;

pub use connection::{StoreBackend, StoreConfig, open_slot_store};
pub use error::StoreError;
pub use seed::seed_organizations;
pub use slot::{FileSlotStore, MemorySlotStore};
