//! Registry implementations over slot storage.

mod organization;

pub use organization::SlotOrganizationRepository;
