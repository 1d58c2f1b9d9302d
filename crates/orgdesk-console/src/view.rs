//! Dashboard views and their navigation paths.

/// The mutually exclusive main views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Overview,
    Organizations,
    Team,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Overview,
        View::Organizations,
        View::Team,
        View::Settings,
    ];

    /// Resolve a navigation path. `/` is an alias for the overview.
    pub fn from_path(path: &str) -> Option<View> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/dashboard" => Some(View::Overview),
            "/organizations" => Some(View::Organizations),
            "/team" => Some(View::Team),
            "/settings" => Some(View::Settings),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Overview => "/dashboard",
            View::Organizations => "/organizations",
            View::Team => "/team",
            View::Settings => "/settings",
        }
    }

    /// Breadcrumb title.
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Dashboard",
            View::Organizations => "Organizations",
            View::Team => "Team Access",
            View::Settings => "Settings",
        }
    }
}
