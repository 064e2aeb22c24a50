//! Tenant domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    Active,
    Notice,
    Former,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Notice => "notice",
            Self::Former => "former",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Name of the property the tenant occupies (denormalized).
    pub property: String,
    pub unit: String,
    pub rent_amount: u32,
    pub status: TenantStatus,
    pub move_in: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTenant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property: String,
    pub unit: String,
    pub rent_amount: u32,
    pub status: TenantStatus,
    pub move_in: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateTenant {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub property: Option<String>,
    pub unit: Option<String>,
    pub rent_amount: Option<u32>,
    pub status: Option<TenantStatus>,
    pub move_in: Option<NaiveDate>,
}

impl UpdateTenant {
    /// Shallow-merge the set fields onto `tenant`.
    pub fn apply(self, tenant: &mut Tenant) {
        if let Some(name) = self.name {
            tenant.name = name;
        }
        if let Some(email) = self.email {
            tenant.email = email;
        }
        if let Some(phone) = self.phone {
            tenant.phone = phone;
        }
        if let Some(property) = self.property {
            tenant.property = property;
        }
        if let Some(unit) = self.unit {
            tenant.unit = unit;
        }
        if let Some(rent_amount) = self.rent_amount {
            tenant.rent_amount = rent_amount;
        }
        if let Some(status) = self.status {
            tenant.status = status;
        }
        if let Some(move_in) = self.move_in {
            tenant.move_in = move_in;
        }
    }
}
