//! Modal sub-state and the form buffer it edits.

use orgdesk_core::models::organization::Organization;

/// Which dialog, if any, is open over the current view.
///
/// `Edit` and `Delete` carry a transient copy of their target; the
/// registry remains the owner of the real record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(Organization),
    Delete(Organization),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn target(&self) -> Option<&Organization> {
        match self {
            Modal::Edit(org) | Modal::Delete(org) => Some(org),
            Modal::Closed | Modal::Create => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Closed => "",
            Modal::Create => "Create New Organization",
            Modal::Edit(_) => "Edit Organization",
            Modal::Delete(_) => "Delete Organization",
        }
    }

    /// Label of the confirming button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Modal::Closed => "",
            Modal::Create => "Provision Tenant",
            Modal::Edit(_) => "Save Changes",
            Modal::Delete(_) => "Yes, Delete Everything",
        }
    }
}

/// Form fields edited inside the create/edit dialog.
///
/// `password` is the initial admin password shown on create only. It is
/// buffered but not sent to the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBuffer {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormBuffer {
    pub fn from_organization(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            email: org.admin_email.clone(),
            password: String::new(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}
