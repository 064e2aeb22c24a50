//! Lease domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    Active,
    Expired,
    Terminated,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Terminated => "terminated",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaseType {
    Monthly,
    Quarterly,
    Yearly,
}

impl LeaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

/// A rental agreement binding a tenant to a unit.
///
/// `tenant` and `unit` are denormalized display strings; there is no
/// referential link to the tenant or property collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lease {
    pub id: EntityId,
    pub tenant: String,
    pub unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Monthly rent in whole currency units.
    pub rent_amount: u32,
    pub deposit: u32,
    pub status: LeaseStatus,
    pub lease_type: LeaseType,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new lease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLease {
    pub tenant: String,
    pub unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent_amount: u32,
    pub deposit: u32,
    pub status: LeaseStatus,
    pub lease_type: LeaseType,
    pub notes: Option<String>,
}

/// Fields that can be updated on an existing lease.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateLease {
    pub tenant: Option<String>,
    pub unit: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rent_amount: Option<u32>,
    pub deposit: Option<u32>,
    pub status: Option<LeaseStatus>,
    pub lease_type: Option<LeaseType>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub notes: Option<Option<String>>,
}

impl UpdateLease {
    /// Shallow-merge the set fields onto `lease`.
    pub fn apply(self, lease: &mut Lease) {
        if let Some(tenant) = self.tenant {
            lease.tenant = tenant;
        }
        if let Some(unit) = self.unit {
            lease.unit = unit;
        }
        if let Some(start_date) = self.start_date {
            lease.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            lease.end_date = end_date;
        }
        if let Some(rent_amount) = self.rent_amount {
            lease.rent_amount = rent_amount;
        }
        if let Some(deposit) = self.deposit {
            lease.deposit = deposit;
        }
        if let Some(status) = self.status {
            lease.status = status;
        }
        if let Some(lease_type) = self.lease_type {
            lease.lease_type = lease_type;
        }
        if let Some(notes) = self.notes {
            lease.notes = notes;
        }
    }
}
