//! Root shell: boots the session and picks the screen to show.

use orgdesk_auth::session::SessionStore;
use orgdesk_core::error::{ConsoleError, ConsoleResult};
use orgdesk_core::models::session::AuthState;
use orgdesk_core::repository::{Authenticator, OrganizationRepository, SlotStore};
use tracing::warn;

use crate::dashboard::DashboardController;
use crate::login::LoginForm;

/// What the shell is currently showing.
pub enum Screen<'a, R: OrganizationRepository> {
    Login(&'a LoginForm),
    Dashboard(&'a DashboardController<R>),
}

/// Owns the session and, while authenticated, the dashboard.
///
/// The registry handle is cloned into each new dashboard, so `R` is
/// normally an `Arc` around the real repository.
pub struct RootShell<S: SlotStore, A: Authenticator, R: OrganizationRepository + Clone> {
    session: SessionStore<S, A>,
    registry: R,
    login: LoginForm,
    dashboard: Option<DashboardController<R>>,
}

impl<S, A, R> RootShell<S, A, R>
where
    S: SlotStore,
    A: Authenticator,
    R: OrganizationRepository + Clone,
{
    pub fn new(session: SessionStore<S, A>, registry: R) -> Self {
        Self {
            session,
            registry,
            login: LoginForm::default(),
            dashboard: None,
        }
    }

    pub fn auth_state(&self) -> &AuthState {
        self.session.state()
    }

    /// Restore any persisted session and open the dashboard if it holds.
    pub async fn boot(&mut self) {
        if self.session.boot().await.is_authenticated {
            self.enter_dashboard().await;
        }
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    /// Submit the login form; on success the dashboard replaces it.
    pub async fn login(&mut self) -> ConsoleResult<()> {
        self.login.submit(&mut self.session).await?;
        self.enter_dashboard().await;
        Ok(())
    }

    /// End the session and return to a fresh login form.
    pub fn logout(&mut self) -> ConsoleResult<()> {
        self.dashboard = None;
        self.login = LoginForm::default();
        self.session.logout()
    }

    pub fn screen(&self) -> Screen<'_, R> {
        match &self.dashboard {
            Some(dashboard) => Screen::Dashboard(dashboard),
            None => Screen::Login(&self.login),
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardController<R>> {
        self.dashboard.as_ref()
    }

    pub fn dashboard_mut(&mut self) -> ConsoleResult<&mut DashboardController<R>> {
        self.dashboard
            .as_mut()
            .ok_or_else(|| ConsoleError::AuthenticationFailed {
                reason: "not signed in".into(),
            })
    }

    pub fn render(&self) -> String {
        match self.screen() {
            Screen::Login(form) => form.render(),
            Screen::Dashboard(dashboard) => dashboard.render(),
        }
    }

    async fn enter_dashboard(&mut self) {
        let Some(user) = self.session.user().cloned() else {
            return;
        };
        let mut dashboard = DashboardController::new(self.registry.clone(), user);
        if let Err(e) = dashboard.refresh().await {
            warn!(error = %e, "Initial organization fetch failed");
        }
        self.dashboard = Some(dashboard);
    }
}
