//! Integration tests for the maintenance form binder.

use chrono::NaiveDate;
use tenura_app::error::FormWarning;
use tenura_app::forms::MaintenanceForm;
use tenura_app::lookup::ReferenceData;
use tenura_core::models::maintenance::{MaintenanceStatus, Priority};
use tenura_core::models::tenant::{CreateTenant, TenantStatus};
use tenura_core::store::{MaintenanceStore, TenantStore};
use tenura_store::{InMemoryMaintenanceStore, InMemoryTenantStore};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn reference() -> ReferenceData {
    let tenants = InMemoryTenantStore::new();
    for (name, property, unit) in [
        ("Sarah Johnson", "Sunset Apartments", "Apt 101"),
        ("Mike Chen", "Sunset Apartments", "Apt 205"),
        ("Emma Davis", "Oak Grove Duplex", "Unit A"),
    ] {
        tenants
            .add(CreateTenant {
                name: name.into(),
                email: format!("{}@example.com", unit.to_lowercase().replace(' ', "-")),
                phone: "555-0100".into(),
                property: property.into(),
                unit: unit.into(),
                rent_amount: 1200,
                status: TenantStatus::Active,
                move_in: date(2023, 6, 1),
            })
            .await
            .unwrap();
    }
    ReferenceData::from_records(&tenants.list().await.unwrap())
}

#[tokio::test]
async fn selecting_property_populates_units_and_clears_unit_and_tenant() {
    let reference = reference().await;
    let mut form = MaintenanceForm::new();

    form.select_property(&reference, "Sunset Apartments");
    form.select_unit(&reference, "Apt 101");
    assert_eq!(form.draft().tenant, "Sarah Johnson");

    // Switching property resets the dependent fields.
    form.select_property(&reference, "Oak Grove Duplex");
    assert_eq!(form.available_units(), ["Unit A"]);
    assert!(form.draft().unit.is_empty());
    assert!(form.draft().tenant.is_empty());
}

#[tokio::test]
async fn selecting_unknown_property_warns_with_empty_choice_set() {
    let reference = reference().await;
    let mut form = MaintenanceForm::new();

    form.select_property(&reference, "Atlantis Towers");
    assert!(form.available_units().is_empty());
    assert_eq!(
        form.take_warnings(),
        vec![FormWarning::UnknownProperty("Atlantis Towers".into())]
    );
}

#[tokio::test]
async fn selecting_unit_autofills_tenant() {
    let reference = reference().await;
    let mut form = MaintenanceForm::new();

    form.select_property(&reference, "Sunset Apartments");
    form.select_unit(&reference, "Apt 205");

    assert_eq!(form.draft().unit, "Apt 205");
    assert_eq!(form.draft().tenant, "Mike Chen");
}

#[tokio::test]
async fn selecting_unassigned_unit_warns() {
    let reference = reference().await;
    let mut form = MaintenanceForm::new();

    form.select_property(&reference, "Sunset Apartments");
    form.select_unit(&reference, "Apt 404");

    assert_eq!(form.draft().unit, "Apt 404");
    assert!(form.draft().tenant.is_empty());
    assert_eq!(
        form.take_warnings(),
        vec![FormWarning::UnassignedUnit("Apt 404".into())]
    );
}

#[tokio::test]
async fn submit_creates_request_and_resets() {
    let reference = reference().await;
    let store = InMemoryMaintenanceStore::new();
    let mut form = MaintenanceForm::new();

    form.select_property(&reference, "Sunset Apartments");
    form.select_unit(&reference, "Apt 101");
    form.set_issue("Leaking faucet");
    form.set_description("Kitchen faucet drips constantly");
    form.set_priority(Priority::High);
    form.set_reported_on(date(2025, 7, 2));

    let request = form.submit(&store).await.unwrap();
    assert_eq!(request.property, "Sunset Apartments");
    assert_eq!(request.tenant, "Sarah Johnson");
    assert_eq!(request.priority, Priority::High);
    assert_eq!(request.status, MaintenanceStatus::Pending);
    assert_eq!(request.assigned_to, None);

    assert!(form.draft().property.is_empty());
    assert!(form.available_units().is_empty());
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn submit_while_editing_updates_in_place() {
    let reference = reference().await;
    let store = InMemoryMaintenanceStore::new();

    let mut form = MaintenanceForm::new();
    form.select_property(&reference, "Sunset Apartments");
    form.select_unit(&reference, "Apt 101");
    form.set_issue("Leaking faucet");
    form.set_reported_on(date(2025, 7, 2));
    let original = form.submit(&store).await.unwrap();

    let mut edit = MaintenanceForm::edit(&original);
    edit.set_status(MaintenanceStatus::InProgress);
    edit.set_assigned_to("Bob's Plumbing");
    let updated = edit.submit(&store).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.status, MaintenanceStatus::InProgress);
    assert_eq!(updated.assigned_to.as_deref(), Some("Bob's Plumbing"));
    assert_eq!(store.list().await.unwrap().len(), 1);
}
