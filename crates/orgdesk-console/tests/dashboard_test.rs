//! Integration tests for the dashboard controller over an in-memory
//! registry.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use orgdesk_console::dashboard::{DashboardController, OPERATION_FAILED};
use orgdesk_console::modal::{FormBuffer, Modal};
use orgdesk_console::view::View;
use orgdesk_core::SimulatedLatency;
use orgdesk_core::error::{ConsoleError, ConsoleResult};
use orgdesk_core::models::organization::{
    CreateOrganization, Organization, OrganizationStatus, UpdateOrganization,
};
use orgdesk_core::models::user::{User, UserRole};
use orgdesk_core::repository::OrganizationRepository;
use orgdesk_store::MemorySlotStore;
use orgdesk_store::repository::SlotOrganizationRepository;
use uuid::Uuid;

type Registry = Arc<SlotOrganizationRepository<MemorySlotStore>>;

fn admin() -> User {
    User {
        id: "admin-1".into(),
        email: "admin@example.com".into(),
        name: "Super Admin".into(),
        role: UserRole::SuperAdmin,
    }
}

/// Helper: controller over a fresh registry, already refreshed.
async fn setup() -> (DashboardController<Registry>, Registry) {
    let registry = Arc::new(SlotOrganizationRepository::new(
        MemorySlotStore::new(),
        SimulatedLatency::none(),
    ));
    let mut dashboard = DashboardController::new(registry.clone(), admin());
    dashboard.refresh().await.unwrap();
    (dashboard, registry)
}

/// Registry whose `list` can be switched to fail.
struct FlakyRegistry {
    inner: SlotOrganizationRepository<MemorySlotStore>,
    fail_list: AtomicBool,
}

impl OrganizationRepository for FlakyRegistry {
    async fn list(&self) -> ConsoleResult<Vec<Organization>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ConsoleError::Storage("slot unavailable".into()));
        }
        self.inner.list().await
    }

    async fn get_by_id(&self, id: Uuid) -> ConsoleResult<Organization> {
        self.inner.get_by_id(id).await
    }

    async fn create(&self, input: CreateOrganization) -> ConsoleResult<Organization> {
        self.inner.create(input).await
    }

    async fn update(&self, id: Uuid, input: UpdateOrganization) -> ConsoleResult<Organization> {
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: Uuid) -> ConsoleResult<()> {
        self.inner.delete(id).await
    }
}

// -----------------------------------------------------------------------
// Loading, navigation, filtering
// -----------------------------------------------------------------------

#[tokio::test]
async fn starts_loading_until_first_refresh() {
    let registry = Arc::new(SlotOrganizationRepository::new(
        MemorySlotStore::new(),
        SimulatedLatency::none(),
    ));
    let mut dashboard = DashboardController::new(registry, admin());
    assert!(dashboard.is_loading());
    assert!(dashboard.render().contains("Loading..."));

    dashboard.refresh().await.unwrap();
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.organizations().len(), 3);
}

#[tokio::test]
async fn navigation_maps_paths_to_views() {
    let (mut dashboard, _registry) = setup().await;
    assert_eq!(dashboard.view(), View::Overview);

    assert_eq!(dashboard.navigate("/organizations"), View::Organizations);
    assert_eq!(dashboard.navigate("/team"), View::Team);
    assert_eq!(dashboard.navigate("/settings"), View::Settings);
    assert_eq!(dashboard.navigate("/"), View::Overview);
    assert_eq!(dashboard.navigate("/security"), View::Overview);
}

#[tokio::test]
async fn filter_matches_name_or_email_ignoring_case() {
    let (mut dashboard, _registry) = setup().await;

    dashboard.set_search("");
    assert_eq!(dashboard.visible_organizations().len(), 3);

    dashboard.set_search("MANAGER@");
    let visible = dashboard.visible_organizations();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Globex Inc");

    dashboard.set_search("corp");
    let names: Vec<_> = dashboard
        .visible_organizations()
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(names, ["Acme Corp", "Soylent Corp"]);

    dashboard.set_search("nothing-matches");
    assert!(dashboard.visible_organizations().is_empty());

    // The underlying list is untouched.
    assert_eq!(dashboard.organizations().len(), 3);
}

#[tokio::test]
async fn overview_metrics_count_statuses() {
    let (dashboard, _registry) = setup().await;
    let metrics = dashboard.overview();

    assert_eq!(metrics.total, 3);
    assert_eq!(metrics.active, 2);
    assert_eq!(metrics.inactive, 1);
    assert_eq!(metrics.pending, 0);
    assert_eq!(metrics.recent[0].name, "Soylent Corp");
    assert!(metrics.recent.iter().all(|o| o.status != OrganizationStatus::Pending));
}

// -----------------------------------------------------------------------
// Modal state
// -----------------------------------------------------------------------

#[tokio::test]
async fn open_create_clears_form() {
    let (mut dashboard, _registry) = setup().await;
    dashboard.form_mut().name = "leftover".into();

    dashboard.open_create();

    assert_eq!(dashboard.modal(), &Modal::Create);
    assert!(dashboard.form().is_empty());
}

#[tokio::test]
async fn open_edit_seeds_form_from_target() {
    let (mut dashboard, _registry) = setup().await;
    let target = dashboard.organizations()[1].clone();

    dashboard.open_edit(target.clone());

    assert_eq!(dashboard.modal(), &Modal::Edit(target.clone()));
    assert_eq!(
        dashboard.form(),
        &FormBuffer {
            name: target.name.clone(),
            email: target.admin_email.clone(),
            password: String::new(),
        }
    );
}

#[tokio::test]
async fn open_delete_records_target_without_prefill() {
    let (mut dashboard, _registry) = setup().await;
    let target = dashboard.organizations()[0].clone();

    dashboard.open_delete(target.clone());

    assert_eq!(dashboard.modal().target(), Some(&target));
    assert!(dashboard.form().is_empty());
}

#[tokio::test]
async fn open_delete_discards_text_left_by_edit() {
    let (mut dashboard, _registry) = setup().await;
    let target = dashboard.organizations()[0].clone();
    dashboard.open_edit(target.clone());
    dashboard.form_mut().password = "typed".into();

    dashboard.open_delete(target);

    assert!(dashboard.form().is_empty());
}

#[tokio::test]
async fn close_modal_clears_everything() {
    let (mut dashboard, _registry) = setup().await;
    let target = dashboard.organizations()[0].clone();
    dashboard.open_edit(target);
    dashboard.form_mut().name = "typed".into();

    dashboard.close_modal();

    assert_eq!(dashboard.modal(), &Modal::Closed);
    assert!(dashboard.form().is_empty());
}

// -----------------------------------------------------------------------
// Submission
// -----------------------------------------------------------------------

#[tokio::test]
async fn submit_create_refreshes_and_closes() {
    let (mut dashboard, registry) = setup().await;
    dashboard.open_create();
    dashboard.form_mut().name = "Acme Two".into();
    dashboard.form_mut().email = "a@b.com".into();
    dashboard.form_mut().password = "initial-secret".into();

    dashboard.submit().await.unwrap();

    assert!(!dashboard.is_busy());
    assert_eq!(dashboard.modal(), &Modal::Closed);
    assert!(dashboard.form().is_empty());
    assert!(dashboard.notice().is_none());

    let first = &dashboard.organizations()[0];
    assert_eq!(first.name, "Acme Two");
    assert_eq!(first.collection_name, "org_acme_two");
    assert_eq!(registry.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn submit_edit_updates_record() {
    let (mut dashboard, _registry) = setup().await;
    let target = dashboard.organizations()[2].clone();
    dashboard.open_edit(target.clone());
    dashboard.form_mut().name = "Soylent Green".into();

    dashboard.submit().await.unwrap();

    let updated = dashboard
        .organizations()
        .iter()
        .find(|o| o.id == target.id)
        .unwrap();
    assert_eq!(updated.name, "Soylent Green");
    assert_eq!(updated.admin_email, target.admin_email);
    assert_eq!(updated.collection_name, "org_soylent_green");
}

#[tokio::test]
async fn submit_delete_removes_record() {
    let (mut dashboard, _registry) = setup().await;
    let target = dashboard.organizations()[0].clone();
    dashboard.open_delete(target.clone());

    dashboard.submit().await.unwrap();

    assert_eq!(dashboard.organizations().len(), 2);
    assert!(dashboard.organizations().iter().all(|o| o.id != target.id));
    assert_eq!(dashboard.modal(), &Modal::Closed);
}

#[tokio::test]
async fn failed_submit_keeps_modal_and_raises_notice() {
    let (mut dashboard, _registry) = setup().await;
    dashboard.open_create();
    dashboard.form_mut().name = "acme corp".into();
    dashboard.form_mut().email = "dup@acme.com".into();

    let result = dashboard.submit().await;

    assert!(matches!(result, Err(ConsoleError::AlreadyExists { .. })));
    assert!(!dashboard.is_busy());
    assert_eq!(dashboard.modal(), &Modal::Create);
    assert_eq!(dashboard.form().name, "acme corp");
    assert_eq!(dashboard.notice().unwrap().message, OPERATION_FAILED);
    assert_eq!(dashboard.organizations().len(), 3);
    assert!(dashboard.render().contains("! Operation failed"));

    // Correcting the input and resubmitting succeeds and clears the notice.
    dashboard.form_mut().name = "Acme Labs".into();
    dashboard.submit().await.unwrap();
    assert!(dashboard.notice().is_none());
    assert_eq!(dashboard.organizations().len(), 4);
}

#[tokio::test]
async fn edit_of_deleted_record_reports_not_found() {
    let (mut dashboard, registry) = setup().await;
    let target = dashboard.organizations()[0].clone();
    registry.delete(target.id).await.unwrap();

    dashboard.open_edit(target);
    let result = dashboard.submit().await;

    assert!(matches!(result, Err(ConsoleError::NotFound { .. })));
    assert!(dashboard.modal().is_open());
    // List stays as last fetched.
    assert_eq!(dashboard.organizations().len(), 3);
}

#[tokio::test]
async fn write_succeeds_even_when_follow_up_refresh_fails() {
    let registry = Arc::new(FlakyRegistry {
        inner: SlotOrganizationRepository::new(MemorySlotStore::new(), SimulatedLatency::none()),
        fail_list: AtomicBool::new(false),
    });
    let mut dashboard = DashboardController::new(registry.clone(), admin());
    dashboard.refresh().await.unwrap();

    registry.fail_list.store(true, Ordering::SeqCst);
    dashboard.open_create();
    dashboard.form_mut().name = "Initech".into();
    dashboard.form_mut().email = "bill@initech.com".into();

    dashboard.submit().await.unwrap();

    assert_eq!(dashboard.modal(), &Modal::Closed);
    assert!(dashboard.notice().is_none());
    assert!(!dashboard.is_busy());
    // The local list is stale; the registry holds the new record.
    assert_eq!(dashboard.organizations().len(), 3);
    assert_eq!(registry.inner.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn cancelled_submit_does_not_leave_dashboard_busy() {
    let registry = Arc::new(SlotOrganizationRepository::new(
        MemorySlotStore::new(),
        SimulatedLatency::fixed(200),
    ));
    let mut dashboard = DashboardController::new(registry.clone(), admin());
    dashboard.refresh().await.unwrap();

    dashboard.open_create();
    dashboard.form_mut().name = "Initech".into();
    dashboard.form_mut().email = "bill@initech.com".into();

    let timed_out = tokio::time::timeout(Duration::from_millis(50), dashboard.submit()).await;
    assert!(timed_out.is_err());
    assert!(!dashboard.is_busy());

    // The dialog is still open and a resubmit goes through.
    assert_eq!(dashboard.modal(), &Modal::Create);
    dashboard.submit().await.unwrap();
    assert_eq!(dashboard.modal(), &Modal::Closed);
    assert_eq!(registry.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn submit_without_modal_is_noop() {
    let (mut dashboard, registry) = setup().await;
    dashboard.submit().await.unwrap();
    assert_eq!(registry.list().await.unwrap().len(), 3);
}

// -----------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------

#[tokio::test]
async fn render_reflects_view_and_modal() {
    let (mut dashboard, _registry) = setup().await;

    let overview = dashboard.render();
    assert!(overview.contains("Platform > Dashboard  [SU]"));
    assert!(overview.contains("Welcome back, Super"));

    dashboard.navigate("/organizations");
    dashboard.set_search("globex");
    let list = dashboard.render();
    assert!(list.contains("Globex Inc  <manager@globex.com>  +Active  org_globex_inc"));
    assert!(!list.contains("Acme Corp"));

    dashboard.open_create();
    let dialog = dashboard.render();
    assert!(dialog.contains("Create New Organization"));
    assert!(dialog.contains("Initial Admin Password"));
    assert!(dialog.contains("Provision Tenant"));

    let target = dashboard.organizations()[0].clone();
    dashboard.open_delete(target);
    let confirm = dashboard.render();
    assert!(confirm.contains("Delete Organization"));
    assert!(confirm.contains("Yes, Delete Everything"));
}
