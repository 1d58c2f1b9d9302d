//! Slot-backed implementation of [`OrganizationRepository`].
//!
//! The whole organization list lives in a single slot as a JSON array.
//! Every write is a read-modify-write of that blob, serialized by an
//! async mutex so concurrent requests cannot interleave.

use std::sync::Arc;

use chrono::Utc;
use orgdesk_core::SimulatedLatency;
use orgdesk_core::error::{ConsoleError, ConsoleResult};
use orgdesk_core::models::organization::{
    CreateOrganization, DEFAULT_DB_CONNECTION, Organization, OrganizationStatus,
    UpdateOrganization, collection_name_for,
};
use orgdesk_core::repository::{ORGANIZATIONS_SLOT, OrganizationRepository, SlotStore};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::StoreError;
use crate::seed::seed_organizations;

/// The organization registry.
#[derive(Clone)]
pub struct SlotOrganizationRepository<S: SlotStore> {
    store: S,
    latency: SimulatedLatency,
    write_lock: Arc<Mutex<()>>,
}

impl<S: SlotStore> SlotOrganizationRepository<S> {
    pub fn new(store: S, latency: SimulatedLatency) -> Self {
        Self {
            store,
            latency,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read the stored list, seeding it when the slot is empty.
    ///
    /// An unreadable slot or blob yields the seed set without failing.
    fn load(&self) -> ConsoleResult<Vec<Organization>> {
        let blob = match self.store.read(ORGANIZATIONS_SLOT) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Organization slot unreadable, using seed set");
                return Ok(seed_organizations());
            }
        };

        match blob {
            Some(blob) if !blob.trim().is_empty() => {
                match serde_json::from_str::<Vec<Organization>>(&blob) {
                    Ok(orgs) => Ok(orgs),
                    Err(e) => {
                        warn!(error = %e, "Stored organization list is corrupt, using seed set");
                        Ok(seed_organizations())
                    }
                }
            }
            _ => {
                let seed = seed_organizations();
                if let Err(e) = self.save(&seed) {
                    warn!(error = %e, "Failed to persist seed set");
                } else {
                    info!(count = seed.len(), "Seeded empty organization registry");
                }
                Ok(seed)
            }
        }
    }

    fn save(&self, orgs: &[Organization]) -> ConsoleResult<()> {
        let blob = serde_json::to_string(orgs).map_err(StoreError::from)?;
        self.store.write(ORGANIZATIONS_SLOT, &blob)
    }
}

fn validate(name: &str, admin_email: &str) -> ConsoleResult<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ConsoleError::Validation {
            message: "organization name must not be empty".into(),
        });
    }
    let admin_email = admin_email.trim();
    if admin_email.is_empty() || !admin_email.contains('@') {
        return Err(ConsoleError::Validation {
            message: format!("invalid admin email: {admin_email:?}"),
        });
    }
    Ok((name.to_string(), admin_email.to_string()))
}

fn not_found(id: Uuid) -> ConsoleError {
    ConsoleError::NotFound {
        entity: "organization".into(),
        id: id.to_string(),
    }
}

impl<S: SlotStore> OrganizationRepository for SlotOrganizationRepository<S> {
    async fn list(&self) -> ConsoleResult<Vec<Organization>> {
        self.latency.pause().await;
        let _guard = self.write_lock.lock().await;
        let orgs = self.load()?;
        debug!(count = orgs.len(), "Listed organizations");
        Ok(orgs)
    }

    async fn get_by_id(&self, id: Uuid) -> ConsoleResult<Organization> {
        self.latency.pause().await;
        let _guard = self.write_lock.lock().await;
        self.load()?
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, input: CreateOrganization) -> ConsoleResult<Organization> {
        self.latency.pause().await;
        let (name, admin_email) = validate(&input.name, &input.admin_email)?;

        let _guard = self.write_lock.lock().await;
        let mut orgs = self.load()?;

        if orgs.iter().any(|o| o.has_name(&name)) {
            warn!(name = %name, "Rejected duplicate organization name");
            return Err(ConsoleError::AlreadyExists {
                entity: "Organization".into(),
                name,
            });
        }

        let org = Organization {
            id: Uuid::new_v4(),
            collection_name: collection_name_for(&name),
            name,
            admin_email,
            status: OrganizationStatus::Active,
            created_at: Utc::now(),
            db_connection: DEFAULT_DB_CONNECTION.to_string(),
        };

        orgs.insert(0, org.clone());
        self.save(&orgs)?;

        info!(
            id = %org.id,
            name = %org.name,
            collection = %org.collection_name,
            "Created organization"
        );
        Ok(org)
    }

    async fn update(&self, id: Uuid, input: UpdateOrganization) -> ConsoleResult<Organization> {
        self.latency.pause().await;

        let _guard = self.write_lock.lock().await;
        let mut orgs = self.load()?;
        let index = orgs
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| not_found(id))?;

        // Name uniqueness is only enforced on create.
        let (name, admin_email) = validate(&input.name, &input.admin_email)?;

        let org = &mut orgs[index];
        org.collection_name = collection_name_for(&name);
        org.name = name;
        org.admin_email = admin_email;
        let updated = org.clone();

        self.save(&orgs)?;

        info!(
            id = %updated.id,
            name = %updated.name,
            collection = %updated.collection_name,
            "Updated organization"
        );
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> ConsoleResult<()> {
        self.latency.pause().await;

        let _guard = self.write_lock.lock().await;
        let mut orgs = self.load()?;
        let before = orgs.len();
        orgs.retain(|o| o.id != id);

        if orgs.len() == before {
            debug!(id = %id, "Delete of unknown organization ignored");
            return Ok(());
        }

        self.save(&orgs)?;
        info!(id = %id, "Deleted organization");
        Ok(())
    }
}
