//! orgdesk Console — the administrative console's state machines and
//! their text presentation.
//!
//! [`RootShell`] owns the session and decides between the login screen
//! and the [`DashboardController`]. The controller holds all transient
//! UI state (current view, search text, modal, form buffer, busy flag)
//! and talks to the registry it was handed.

pub mod components;
pub mod dashboard;
pub mod login;
pub mod modal;
pub mod shell;
pub mod view;

pub use dashboard::{DashboardController, Notice, OverviewMetrics};
pub use login::LoginForm;
pub use modal::{FormBuffer, Modal};
pub use shell::{RootShell, Screen};
pub use view::View;
