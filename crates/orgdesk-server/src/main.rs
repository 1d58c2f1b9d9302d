//! orgdesk Server — application entry point.

use orgdesk_auth::AuthService;
use orgdesk_server::{AppState, Settings, router};
use orgdesk_store::open_slot_store;
use orgdesk_store::repository::SlotOrganizationRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orgdesk=info")),
        )
        .json()
        .init();

    let config_path =
        std::env::var("ORGDESK_CONFIG").unwrap_or_else(|_| "orgdesk.toml".to_string());
    let settings = Settings::load(&config_path)?;

    let store_config = settings.store_config();
    let slots = open_slot_store(&store_config)?;
    let registry = SlotOrganizationRepository::new(slots, store_config.latency);
    let auth = AuthService::new(settings.auth_config())?;
    let app = router(AppState::new(registry, auth));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!(addr = %settings.bind_addr, "orgdesk server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("orgdesk server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
