//! Dashboard controller.
//!
//! Owns every piece of transient UI state for an authenticated session
//! and routes form submissions to the registry. The registry is handed
//! in at construction; the controller never reaches for shared state.

use std::fmt::Write as _;
use std::ops::{Deref, DerefMut};

use orgdesk_core::error::{ConsoleError, ConsoleResult};
use orgdesk_core::models::organization::{
    CreateOrganization, Organization, OrganizationStatus, UpdateOrganization,
};
use orgdesk_core::models::user::User;
use orgdesk_core::repository::OrganizationRepository;
use tracing::{debug, info, warn};

use crate::components::{Badge, Button, ButtonSize, ButtonVariant, Card, Input, ModalShell};
use crate::modal::{FormBuffer, Modal};
use crate::view::View;

/// Message shown to the operator when a submission fails.
pub const OPERATION_FAILED: &str = "Operation failed";

/// Number of organizations listed under "recent" on the overview.
const RECENT_LIMIT: usize = 5;

/// A user-visible notice raised by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn failure() -> Self {
        Self {
            message: OPERATION_FAILED.to_string(),
        }
    }
}

/// Aggregates shown on the overview view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverviewMetrics {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub pending: usize,
    /// Most recently created first.
    pub recent: Vec<Organization>,
}

impl OverviewMetrics {
    pub fn from_organizations(orgs: &[Organization]) -> Self {
        let count = |status: OrganizationStatus| {
            orgs.iter().filter(|o| o.status == status).count()
        };

        let mut recent = orgs.to_vec();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(RECENT_LIMIT);

        Self {
            total: orgs.len(),
            active: count(OrganizationStatus::Active),
            inactive: count(OrganizationStatus::Inactive),
            pending: count(OrganizationStatus::Pending),
            recent,
        }
    }
}

/// The registry call a submission maps to.
enum Action {
    Create(CreateOrganization),
    Update(Organization, UpdateOrganization),
    Delete(Organization),
}

pub struct DashboardController<R: OrganizationRepository> {
    registry: R,
    user: User,
    view: View,
    organizations: Vec<Organization>,
    loading: bool,
    search: String,
    modal: Modal,
    form: FormBuffer,
    busy: bool,
    notice: Option<Notice>,
}

impl<R: OrganizationRepository> DashboardController<R> {
    /// A controller in its initial loading state; call
    /// [`DashboardController::refresh`] to fetch the list.
    pub fn new(registry: R, user: User) -> Self {
        Self {
            registry,
            user,
            view: View::default(),
            organizations: Vec::new(),
            loading: true,
            search: String::new(),
            modal: Modal::Closed,
            form: FormBuffer::default(),
            busy: false,
            notice: None,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn form(&self) -> &FormBuffer {
        &self.form
    }

    /// Form fields are edited in place, one keystroke at a time.
    pub fn form_mut(&mut self) -> &mut FormBuffer {
        &mut self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // -------------------------------------------------------------------
    // Navigation and filtering
    // -------------------------------------------------------------------

    /// Switch to the view for `path`. Unknown paths land on the overview.
    pub fn navigate(&mut self, path: &str) -> View {
        self.view = View::from_path(path).unwrap_or_else(|| {
            debug!(path, "Unknown dashboard path, showing overview");
            View::Overview
        });
        self.view
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Organizations whose name or admin email contains the search text,
    /// ignoring case. The stored list is never modified.
    pub fn visible_organizations(&self) -> Vec<&Organization> {
        self.organizations
            .iter()
            .filter(|o| o.matches(&self.search))
            .collect()
    }

    pub fn overview(&self) -> OverviewMetrics {
        OverviewMetrics::from_organizations(&self.organizations)
    }

    // -------------------------------------------------------------------
    // Registry access
    // -------------------------------------------------------------------

    /// Replace the local list with the registry's current contents.
    ///
    /// On failure the previous list is kept. Loading ends either way.
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let result = self.registry.list().await;
        self.loading = false;
        match result {
            Ok(orgs) => {
                debug!(count = orgs.len(), "Organization list refreshed");
                self.organizations = orgs;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to refresh organization list");
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------
    // Modal lifecycle
    // -------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.modal = Modal::Create;
        self.form.clear();
        self.notice = None;
    }

    /// Open the edit dialog, seeding the form from `org`.
    pub fn open_edit(&mut self, org: Organization) {
        self.form = FormBuffer::from_organization(&org);
        self.modal = Modal::Edit(org);
        self.notice = None;
    }

    /// Open the delete confirmation for `org`. The form is cleared.
    pub fn open_delete(&mut self, org: Organization) {
        self.modal = Modal::Delete(org);
        self.form.clear();
        self.notice = None;
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form.clear();
    }

    /// Run the registry call for the open dialog.
    ///
    /// On success the list is refreshed and the dialog closed. On failure
    /// a notice is raised and the dialog stays open with its form intact.
    /// The busy flag is cleared when the call ends, including when the
    /// returned future is dropped before completion.
    pub async fn submit(&mut self) -> ConsoleResult<()> {
        if self.busy {
            return Err(ConsoleError::Operation("request already in flight".into()));
        }

        let action = match &self.modal {
            Modal::Closed => return Ok(()),
            Modal::Create => Action::Create(CreateOrganization {
                name: self.form.name.clone(),
                admin_email: self.form.email.clone(),
            }),
            Modal::Edit(org) => Action::Update(
                org.clone(),
                UpdateOrganization {
                    name: self.form.name.clone(),
                    admin_email: self.form.email.clone(),
                },
            ),
            Modal::Delete(org) => Action::Delete(org.clone()),
        };

        let mut this = BusyGuard::enter(self);
        let result = this.dispatch(action).await;

        match &result {
            Ok(()) => {
                // The write landed. A failed refresh is logged by `refresh`
                // and only leaves the list stale.
                let _ = this.refresh().await;
                this.close_modal();
                this.notice = None;
            }
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "Dashboard submission failed");
                this.notice = Some(Notice::failure());
            }
        }

        result
    }

    async fn dispatch(&self, action: Action) -> ConsoleResult<()> {
        match action {
            Action::Create(input) => {
                let org = self.registry.create(input).await?;
                info!(id = %org.id, name = %org.name, "Organization provisioned from dashboard");
            }
            Action::Update(target, input) => {
                let org = self.registry.update(target.id, input).await?;
                info!(id = %org.id, name = %org.name, "Organization edited from dashboard");
            }
            Action::Delete(target) => {
                self.registry.delete(target.id).await?;
                info!(id = %target.id, name = %target.name, "Organization deleted from dashboard");
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------

    /// Render the current view and any open dialog as text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Platform > {}  [{}]",
            self.view.title(),
            self.user.initials()
        );
        let _ = writeln!(out);

        if self.loading {
            let _ = writeln!(out, "Loading...");
        } else {
            match self.view {
                View::Overview => self.render_overview(&mut out),
                View::Organizations => self.render_organizations(&mut out),
                View::Team => self.render_team(&mut out),
                View::Settings => self.render_settings(&mut out),
            }
        }

        if let Some(notice) = &self.notice {
            let _ = writeln!(out, "\n! {}", notice.message);
        }

        let dialog = self.render_modal();
        if !dialog.is_empty() {
            let _ = writeln!(out, "\n{dialog}");
        }
        out
    }

    fn render_overview(&self, out: &mut String) {
        let metrics = self.overview();
        let _ = writeln!(out, "Welcome back, {}", self.user.first_name());
        let _ = writeln!(
            out,
            "{}",
            Card::titled("Total Tenants", metrics.total.to_string())
        );
        let _ = writeln!(
            out,
            "{}",
            Card::titled(
                "By Status",
                format!(
                    "Active: {}\nInactive: {}\nPending: {}",
                    metrics.active, metrics.inactive, metrics.pending
                ),
            )
        );
        let recent = metrics
            .recent
            .iter()
            .map(|o| format!("{}  {}", o.name, o.created_at.format("%Y-%m-%d")))
            .collect::<Vec<_>>()
            .join("\n");
        let _ = writeln!(out, "{}", Card::titled("Recent Tenants", recent));
        let _ = writeln!(
            out,
            "{}",
            Button::new("Provision Tenant").variant(ButtonVariant::Gradient)
        );
    }

    fn render_organizations(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "{}",
            Input::new("Search", self.search.as_str())
                .placeholder("Filter by name or email")
                .icon('?')
        );
        let visible = self.visible_organizations();
        if visible.is_empty() {
            let _ = writeln!(out, "No organizations found.");
            return;
        }
        for org in visible {
            let _ = writeln!(
                out,
                "{}  <{}>  {}  {}",
                org.name,
                org.admin_email,
                Badge { status: org.status },
                org.collection_name
            );
        }
    }

    fn render_team(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "{}",
            Card::titled(
                "Team Management",
                "Manage platform administrators and role-based access control here.",
            )
        );
        let _ = writeln!(
            out,
            "{}",
            Button::new("Invite Member").variant(ButtonVariant::Outline)
        );
    }

    fn render_settings(&self, out: &mut String) {
        let general = [
            Input::new("Platform Name", "orgdesk").to_string(),
            Input::new("Signed in as", self.user.email.as_str()).to_string(),
            format!("Role: {}", self.user.role.label()),
        ]
        .join("\n");
        let _ = writeln!(out, "{}", Card::titled("General Configuration", general));
    }

    fn render_modal(&self) -> String {
        let content = match &self.modal {
            Modal::Closed => return String::new(),
            Modal::Create | Modal::Edit(_) => {
                let mut lines = vec![
                    Input::new("Organization Name", self.form.name.as_str())
                        .placeholder("e.g. Acme Corp")
                        .to_string(),
                    Input::new("Admin Email", self.form.email.as_str())
                        .placeholder("admin@company.com")
                        .to_string(),
                ];
                if matches!(self.modal, Modal::Create) {
                    lines.push(
                        Input::new("Initial Admin Password", self.form.password.as_str())
                            .masked()
                            .to_string(),
                    );
                }
                lines.push(self.modal_buttons(ButtonVariant::Gradient));
                lines.join("\n")
            }
            Modal::Delete(org) => [
                format!("You are about to permanently delete {}.", org.name),
                self.modal_buttons(ButtonVariant::Danger),
            ]
            .join("\n"),
        };

        ModalShell {
            open: true,
            title: self.modal.title().to_string(),
            content,
        }
        .to_string()
    }

    fn modal_buttons(&self, confirm: ButtonVariant) -> String {
        format!(
            "{} {}",
            Button::new("Cancel")
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Sm)
                .disabled(self.busy),
            Button::new(self.modal.submit_label())
                .variant(confirm)
                .loading(self.busy)
        )
    }
}

/// Holds the controller busy until dropped.
struct BusyGuard<'a, R: OrganizationRepository>(&'a mut DashboardController<R>);

impl<'a, R: OrganizationRepository> BusyGuard<'a, R> {
    fn enter(controller: &'a mut DashboardController<R>) -> Self {
        controller.busy = true;
        Self(controller)
    }
}

impl<R: OrganizationRepository> Deref for BusyGuard<'_, R> {
    type Target = DashboardController<R>;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl<R: OrganizationRepository> DerefMut for BusyGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.0
    }
}

impl<R: OrganizationRepository> Drop for BusyGuard<'_, R> {
    fn drop(&mut self) {
        self.0.busy = false;
    }
}
