//! The fixed sample set written into an empty registry.

use chrono::{DateTime, TimeZone, Utc};
use orgdesk_core::models::organization::{
    DEFAULT_DB_CONNECTION, Organization, OrganizationStatus, collection_name_for,
};
use uuid::Uuid;

struct SeedRecord {
    id: u128,
    name: &'static str,
    admin_email: &'static str,
    status: OrganizationStatus,
    /// (year, month, day, hour, minute), UTC.
    created_at: (i32, u32, u32, u32, u32),
}

static SEED: &[SeedRecord] = &[
    SeedRecord {
        id: 1,
        name: "Acme Corp",
        admin_email: "admin@acme.com",
        status: OrganizationStatus::Active,
        created_at: (2023, 10, 15, 10, 0),
    },
    SeedRecord {
        id: 2,
        name: "Globex Inc",
        admin_email: "manager@globex.com",
        status: OrganizationStatus::Active,
        created_at: (2023, 11, 2, 14, 30),
    },
    SeedRecord {
        id: 3,
        name: "Soylent Corp",
        admin_email: "director@soylent.com",
        status: OrganizationStatus::Inactive,
        created_at: (2023, 12, 1, 9, 15),
    },
];

fn timestamp((y, mo, d, h, mi): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

/// The three sample organizations, in stored order.
pub fn seed_organizations() -> Vec<Organization> {
    SEED.iter()
        .map(|r| Organization {
            id: Uuid::from_u128(r.id),
            name: r.name.to_string(),
            admin_email: r.admin_email.to_string(),
            status: r.status,
            created_at: timestamp(r.created_at),
            collection_name: collection_name_for(r.name),
            db_connection: DEFAULT_DB_CONNECTION.to_string(),
        })
        .collect()
}
