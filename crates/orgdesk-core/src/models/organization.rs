//! Organization domain model.
//!
//! Organizations are the tenants managed through the console. Each one
//! carries a derived, slug-safe collection name that identifies its
//! future provisioning target.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Backend location shared by every organization until real
/// provisioning exists.
pub const DEFAULT_DB_CONNECTION: &str = "mongodb://cluster0:27017/master";

/// Prefix prepended to every derived collection name.
pub const COLLECTION_PREFIX: &str = "org_";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrganizationStatus {
    Active,
    Inactive,
    Pending,
}

impl OrganizationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationStatus::Active => "Active",
            OrganizationStatus::Inactive => "Inactive",
            OrganizationStatus::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for OrganizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tenant organization as persisted by the registry.
///
/// Field names serialize in camelCase so the stored blob keeps the
/// layout of the persisted registry slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    /// Display name, unique case-insensitively at creation time.
    pub name: String,
    pub admin_email: String,
    pub status: OrganizationStatus,
    pub created_at: DateTime<Utc>,
    /// Derived from `name` by [`collection_name_for`].
    pub collection_name: String,
    pub db_connection: String,
}

impl Organization {
    /// Case-insensitive name comparison used for the uniqueness check.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// True when `needle` occurs in the name or admin email, ignoring case.
    /// An empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.admin_email.to_lowercase().contains(&needle)
    }
}

/// Fields required to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrganization {
    pub name: String,
    #[serde(rename = "email")]
    pub admin_email: String,
}

/// Fields replaced on an existing organization.
///
/// Both fields are always written; `id`, `status` and `created_at`
/// are preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOrganization {
    pub name: String,
    #[serde(rename = "email")]
    pub admin_email: String,
}

/// Derive the collection name for an organization name.
///
/// Lowercases the input, collapses each run of whitespace into a single
/// `_`, drops everything outside `[a-z0-9_]` and prepends
/// [`COLLECTION_PREFIX`].
pub fn collection_name_for(name: &str) -> String {
    let mut slug = String::with_capacity(COLLECTION_PREFIX.len() + name.len());
    slug.push_str(COLLECTION_PREFIX);

    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            slug.push(c);
        }
    }
    slug
}
