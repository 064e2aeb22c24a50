//! Tenura Server — application entry point.

use std::process::ExitCode;

use tenura_access::config::AccessConfig;
use tenura_access::navigation::default_route;
use tenura_access::role::Role;
use tenura_access::settings::{HttpSettingsClient, SettingsService, StoredRole};
use tenura_access::AccessError;
use tenura_app::config::DispatchConfig;
use tenura_app::dispatch::{cancellation, Dispatcher};
use tenura_app::lookup::ReferenceData;
use tenura_app::reports;
use tenura_core::models::notification::{CreateNotification, NotificationKind};
use tenura_core::models::settings::AppSettings;
use tenura_core::store::{LeaseStore, MaintenanceStore, PropertyStore, TenantStore};
use tenura_core::TenuraResult;
use tenura_store::Stores;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("tenura=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting Tenura server...");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Tenura server failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Tenura server stopped.");
    ExitCode::SUCCESS
}

async fn run() -> TenuraResult<()> {
    let stores = Stores::seeded().await?;

    let tenants = stores.tenants.list().await?;
    let reference = ReferenceData::from_records(&tenants);
    let resolvable = tenants
        .iter()
        .filter(|t| reference.tenant_unit(&t.name).is_some())
        .count();
    tracing::info!(
        tenants = tenants.len(),
        resolvable,
        "reference tables built"
    );

    for role in [Role::Admin, Role::Tenant, Role::Owner] {
        tracing::info!(role = %role, route = default_route(role), "default landing route");
    }

    let properties = stores.properties.list().await?;
    let occupancy = reports::occupancy_summary(&properties);
    let rent = reports::rent_roll(&stores.leases.list().await?);
    let maintenance = reports::maintenance_breakdown(&stores.maintenance.list().await?);
    tracing::info!(
        occupancy_rate = occupancy.occupancy_rate(),
        active_leases = rent.active_leases,
        monthly_rent = rent.monthly_total,
        open_requests = maintenance.open(),
        "portfolio summary"
    );

    // The settings gate rejects non-admins before any request leaves
    // the process, so this wiring check needs no live endpoint.
    let settings_client = HttpSettingsClient::new(&AccessConfig::default())
        .map_err(tenura_core::TenuraError::from)?;
    let settings_service =
        SettingsService::new(StoredRole::new(Some(Role::Owner)), settings_client);
    match settings_service.update_settings(&AppSettings::default()).await {
        Err(AccessError::NotAuthorized) => {
            tracing::info!("settings gate active: non-admin update denied")
        }
        Err(e) => tracing::warn!(error = %e, "settings update failed"),
        Ok(()) => tracing::info!("settings updated"),
    }

    // One dispatch round-trip to exercise the delivery path.
    let dispatcher = Dispatcher::new(stores.notifications.clone(), DispatchConfig::default());
    let (_cancel_handle, cancel_token) = cancellation();
    let sent = dispatcher
        .send(
            CreateNotification {
                title: "Server started".into(),
                message: "Seed data loaded and services wired".into(),
                kind: NotificationKind::Info,
            },
            &cancel_token,
        )
        .await
        .map_err(tenura_core::TenuraError::from)?;
    tracing::info!(id = %sent.id, "startup notification delivered");

    Ok(())
}
