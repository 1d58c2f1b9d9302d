//! Trait definitions for the seams between crates.
//!
//! Registry and authentication operations are async. Slot storage is
//! synchronous: it mirrors a browser key/value slot and every call is a
//! single whole-value read or write.

use uuid::Uuid;

use crate::error::ConsoleResult;
use crate::models::{
    organization::{CreateOrganization, Organization, UpdateOrganization},
    session::LoginOutput,
    user::User,
};

/// Slot holding the serialized organization list.
pub const ORGANIZATIONS_SLOT: &str = "orgdesk.organizations.v1";

/// Slot holding the persisted session token.
pub const SESSION_TOKEN_SLOT: &str = "orgdesk.session.token";

// ---------------------------------------------------------------------------
// Organization registry
// ---------------------------------------------------------------------------

pub trait OrganizationRepository: Send + Sync {
    /// Full current list, most recently created first.
    fn list(&self) -> impl Future<Output = ConsoleResult<Vec<Organization>>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ConsoleResult<Organization>> + Send;
    /// Fails with `AlreadyExists` when the name is taken (ignoring case).
    fn create(
        &self,
        input: CreateOrganization,
    ) -> impl Future<Output = ConsoleResult<Organization>> + Send;
    /// Fails with `NotFound` for an unknown id.
    fn update(
        &self,
        id: Uuid,
        input: UpdateOrganization,
    ) -> impl Future<Output = ConsoleResult<Organization>> + Send;
    /// Idempotent: deleting an unknown id succeeds.
    fn delete(&self, id: Uuid) -> impl Future<Output = ConsoleResult<()>> + Send;
}

impl<R: OrganizationRepository> OrganizationRepository for std::sync::Arc<R> {
    fn list(&self) -> impl Future<Output = ConsoleResult<Vec<Organization>>> + Send {
        (**self).list()
    }

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = ConsoleResult<Organization>> + Send {
        (**self).get_by_id(id)
    }

    fn create(
        &self,
        input: CreateOrganization,
    ) -> impl Future<Output = ConsoleResult<Organization>> + Send {
        (**self).create(input)
    }

    fn update(
        &self,
        id: Uuid,
        input: UpdateOrganization,
    ) -> impl Future<Output = ConsoleResult<Organization>> + Send {
        (**self).update(id, input)
    }

    fn delete(&self, id: Uuid) -> impl Future<Output = ConsoleResult<()>> + Send {
        (**self).delete(id)
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a user and session token.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = ConsoleResult<LoginOutput>> + Send;

    /// Resolve a previously issued token back to its user.
    fn validate_token(&self, token: &str) -> impl Future<Output = ConsoleResult<User>> + Send;
}

impl<A: Authenticator> Authenticator for std::sync::Arc<A> {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = ConsoleResult<LoginOutput>> + Send {
        (**self).login(email, password)
    }

    fn validate_token(&self, token: &str) -> impl Future<Output = ConsoleResult<User>> + Send {
        (**self).validate_token(token)
    }
}

// ---------------------------------------------------------------------------
// Slot storage
// ---------------------------------------------------------------------------

/// Durable named slots, each holding one string value.
pub trait SlotStore: Send + Sync {
    /// `Ok(None)` when the slot has never been written or was removed.
    fn read(&self, slot: &str) -> ConsoleResult<Option<String>>;
    fn write(&self, slot: &str, value: &str) -> ConsoleResult<()>;
    /// Removing an empty slot is not an error.
    fn remove(&self, slot: &str) -> ConsoleResult<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for std::sync::Arc<S> {
    fn read(&self, slot: &str) -> ConsoleResult<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> ConsoleResult<()> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: &str) -> ConsoleResult<()> {
        (**self).remove(slot)
    }
}
