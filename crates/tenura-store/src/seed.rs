//! Aggregate store handle and the canned demo dataset.

use chrono::NaiveDate;
use tenura_core::models::lease::{CreateLease, LeaseStatus, LeaseType};
use tenura_core::models::maintenance::{CreateMaintenanceRequest, MaintenanceStatus, Priority};
use tenura_core::models::notification::{CreateNotification, NotificationKind};
use tenura_core::models::payment::{CreatePayment, PaymentMethod, PaymentStatus};
use tenura_core::models::property::{CreateProperty, PropertyStatus};
use tenura_core::models::tenant::{CreateTenant, TenantStatus};
use tenura_core::store::{
    LeaseStore, MaintenanceStore, NotificationStore, PaymentStore, PropertyStore, TenantStore,
};
use tenura_core::TenuraResult;
use tracing::info;

use crate::store::{
    InMemoryLeaseStore, InMemoryMaintenanceStore, InMemoryNotificationStore,
    InMemoryPaymentStore, InMemoryPropertyStore, InMemoryTenantStore,
};

/// One handle per entity collection; the unit the server wires up.
#[derive(Clone, Default)]
pub struct Stores {
    pub properties: InMemoryPropertyStore,
    pub tenants: InMemoryTenantStore,
    pub leases: InMemoryLeaseStore,
    pub maintenance: InMemoryMaintenanceStore,
    pub payments: InMemoryPaymentStore,
    pub notifications: InMemoryNotificationStore,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

impl Stores {
    /// Empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores populated with the demo dataset.
    pub async fn seeded() -> TenuraResult<Self> {
        let stores = Self::new();
        stores.seed().await?;
        Ok(stores)
    }

    async fn seed(&self) -> TenuraResult<()> {
        self.properties
            .add(CreateProperty {
                name: "Sunset Apartments".into(),
                address: "123 Sunset Blvd, Springfield".into(),
                description: "Mid-rise apartment building near the riverfront".into(),
                property_type: "apartment".into(),
                total_units: 12,
                occupied_units: 10,
                status: PropertyStatus::Active,
                rent_amount: 1200,
                amenities: vec!["parking".into(), "laundry".into(), "gym".into()],
            })
            .await?;
        self.properties
            .add(CreateProperty {
                name: "Oak Grove Duplex".into(),
                address: "45 Oak Grove Ln, Springfield".into(),
                description: "Two-unit duplex with shared garden".into(),
                property_type: "duplex".into(),
                total_units: 2,
                occupied_units: 2,
                status: PropertyStatus::Active,
                rent_amount: 1450,
                amenities: vec!["garden".into(), "garage".into()],
            })
            .await?;
        self.properties
            .add(CreateProperty {
                name: "Maple Court".into(),
                address: "8 Maple Ct, Springfield".into(),
                description: "Townhouse row undergoing facade work".into(),
                property_type: "townhouse".into(),
                total_units: 6,
                occupied_units: 3,
                status: PropertyStatus::Maintenance,
                rent_amount: 1350,
                amenities: vec!["parking".into()],
            })
            .await?;

        self.tenants
            .add(CreateTenant {
                name: "Sarah Johnson".into(),
                email: "sarah.johnson@example.com".into(),
                phone: "555-0101".into(),
                property: "Sunset Apartments".into(),
                unit: "Apt 101".into(),
                rent_amount: 1200,
                status: TenantStatus::Active,
                move_in: date(2023, 6, 1),
            })
            .await?;
        self.tenants
            .add(CreateTenant {
                name: "Mike Chen".into(),
                email: "mike.chen@example.com".into(),
                phone: "555-0102".into(),
                property: "Sunset Apartments".into(),
                unit: "Apt 205".into(),
                rent_amount: 1250,
                status: TenantStatus::Active,
                move_in: date(2023, 9, 15),
            })
            .await?;
        self.tenants
            .add(CreateTenant {
                name: "Emma Davis".into(),
                email: "emma.davis@example.com".into(),
                phone: "555-0103".into(),
                property: "Oak Grove Duplex".into(),
                unit: "Unit A".into(),
                rent_amount: 1450,
                status: TenantStatus::Active,
                move_in: date(2022, 11, 1),
            })
            .await?;
        self.tenants
            .add(CreateTenant {
                name: "Carlos Ortiz".into(),
                email: "carlos.ortiz@example.com".into(),
                phone: "555-0104".into(),
                property: "Maple Court".into(),
                unit: "Unit 3".into(),
                rent_amount: 1350,
                status: TenantStatus::Notice,
                move_in: date(2024, 2, 1),
            })
            .await?;

        self.leases
            .add(CreateLease {
                tenant: "Sarah Johnson".into(),
                unit: "Apt 101".into(),
                start_date: date(2024, 6, 1),
                end_date: date(2025, 6, 1),
                rent_amount: 1200,
                deposit: 1200,
                status: LeaseStatus::Active,
                lease_type: LeaseType::Yearly,
                notes: None,
            })
            .await?;
        self.leases
            .add(CreateLease {
                tenant: "Mike Chen".into(),
                unit: "Apt 205".into(),
                start_date: date(2024, 9, 15),
                end_date: date(2025, 9, 15),
                rent_amount: 1250,
                deposit: 1250,
                status: LeaseStatus::Active,
                lease_type: LeaseType::Monthly,
                notes: Some("Renewal of 2023 lease".into()),
            })
            .await?;
        self.leases
            .add(CreateLease {
                tenant: "Emma Davis".into(),
                unit: "Unit A".into(),
                start_date: date(2023, 11, 1),
                end_date: date(2024, 11, 1),
                rent_amount: 1450,
                deposit: 1450,
                status: LeaseStatus::Expired,
                lease_type: LeaseType::Yearly,
                notes: None,
            })
            .await?;

        self.maintenance
            .add(CreateMaintenanceRequest {
                property: "Sunset Apartments".into(),
                unit: "Apt 101".into(),
                tenant: "Sarah Johnson".into(),
                issue: "Leaking faucet".into(),
                description: "Kitchen faucet drips constantly".into(),
                priority: Priority::Medium,
                status: MaintenanceStatus::Pending,
                reported_on: date(2025, 7, 2),
                assigned_to: None,
                notes: None,
            })
            .await?;
        self.maintenance
            .add(CreateMaintenanceRequest {
                property: "Sunset Apartments".into(),
                unit: "Apt 205".into(),
                tenant: "Mike Chen".into(),
                issue: "Broken heater".into(),
                description: "No heat since Tuesday".into(),
                priority: Priority::High,
                status: MaintenanceStatus::InProgress,
                reported_on: date(2025, 6, 28),
                assigned_to: Some("Springfield HVAC".into()),
                notes: Some("Parts ordered".into()),
            })
            .await?;
        self.maintenance
            .add(CreateMaintenanceRequest {
                property: "Maple Court".into(),
                unit: "Unit 3".into(),
                tenant: "Carlos Ortiz".into(),
                issue: "Cracked window".into(),
                description: "Hairline crack in bedroom window".into(),
                priority: Priority::Low,
                status: MaintenanceStatus::Completed,
                reported_on: date(2025, 5, 12),
                assigned_to: Some("GlassWorks".into()),
                notes: None,
            })
            .await?;

        self.payments
            .add(CreatePayment {
                tenant: "Sarah Johnson".into(),
                property: "Sunset Apartments".into(),
                unit: "Apt 101".into(),
                amount: 1200,
                paid_on: date(2025, 7, 1),
                method: PaymentMethod::BankTransfer,
                status: PaymentStatus::Completed,
            })
            .await?;
        self.payments
            .add(CreatePayment {
                tenant: "Mike Chen".into(),
                property: "Sunset Apartments".into(),
                unit: "Apt 205".into(),
                amount: 1250,
                paid_on: date(2025, 7, 1),
                method: PaymentMethod::Card,
                status: PaymentStatus::Completed,
            })
            .await?;
        self.payments
            .add(CreatePayment {
                tenant: "Carlos Ortiz".into(),
                property: "Maple Court".into(),
                unit: "Unit 3".into(),
                amount: 1350,
                paid_on: date(2025, 7, 3),
                method: PaymentMethod::Cash,
                status: PaymentStatus::Pending,
            })
            .await?;

        self.notifications
            .add(CreateNotification {
                title: "Rent received".into(),
                message: "July rent received from Sarah Johnson".into(),
                kind: NotificationKind::Success,
            })
            .await?;
        self.notifications
            .add(CreateNotification {
                title: "Lease expiring".into(),
                message: "Emma Davis's lease expired and has not been renewed".into(),
                kind: NotificationKind::Warning,
            })
            .await?;

        info!(
            properties = self.properties.list().await?.len(),
            tenants = self.tenants.list().await?.len(),
            leases = self.leases.list().await?.len(),
            "demo dataset seeded"
        );
        Ok(())
    }
}
