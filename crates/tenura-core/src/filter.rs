//! Derived filter views.
//!
//! A filter is a pure projection over a record collection: free-text
//! search OR-ed across the record's searchable fields, AND-ed with exact
//! matches on every active categorical criterion. Categorical fields use
//! `Option` — `None` is the "all" sentinel that disables that criterion.
//! Filtering preserves input order and never mutates the source, so
//! applying the same filter twice yields the same result.

use crate::models::lease::{Lease, LeaseStatus, LeaseType};
use crate::models::maintenance::{MaintenanceRequest, MaintenanceStatus, Priority};
use crate::models::notification::{Notification, NotificationKind};
use crate::models::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::models::property::{Property, PropertyStatus};
use crate::models::tenant::{Tenant, TenantStatus};

/// Case-insensitive substring search across designated fields.
///
/// An empty (or whitespace-only) term matches everything.
pub fn text_matches(term: &str, fields: &[&str]) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// A pure inclusion predicate over one record type.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;

    /// Reset every criterion to its default ("all") state.
    fn clear(&mut self);
}

/// Project the records matching `filter`, preserving input order.
pub fn apply<T: Clone, F: RecordFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct LeaseFilter {
    pub search: String,
    pub status: Option<LeaseStatus>,
    pub lease_type: Option<LeaseType>,
}

impl RecordFilter<Lease> for LeaseFilter {
    fn matches(&self, lease: &Lease) -> bool {
        text_matches(
            &self.search,
            &[&lease.tenant, &lease.unit, lease.status.as_str()],
        ) && self.status.is_none_or(|status| lease.status == status)
            && self
                .lease_type
                .is_none_or(|lease_type| lease.lease_type == lease_type)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct MaintenanceFilter {
    pub search: String,
    pub status: Option<MaintenanceStatus>,
    pub priority: Option<Priority>,
    /// Exact property-name criterion.
    pub property: Option<String>,
}

impl RecordFilter<MaintenanceRequest> for MaintenanceFilter {
    fn matches(&self, request: &MaintenanceRequest) -> bool {
        let assignee = request.assigned_to.as_deref().unwrap_or("");
        text_matches(
            &self.search,
            &[
                &request.property,
                &request.unit,
                &request.tenant,
                &request.issue,
                assignee,
            ],
        ) && self.status.is_none_or(|status| request.status == status)
            && self
                .priority
                .is_none_or(|priority| request.priority == priority)
            && self
                .property
                .as_deref()
                .is_none_or(|property| request.property == property)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub search: String,
    pub status: Option<PropertyStatus>,
    pub property_type: Option<String>,
}

impl RecordFilter<Property> for PropertyFilter {
    fn matches(&self, property: &Property) -> bool {
        text_matches(
            &self.search,
            &[&property.name, &property.address, property.status.as_str()],
        ) && self.status.is_none_or(|status| property.status == status)
            && self
                .property_type
                .as_deref()
                .is_none_or(|property_type| property.property_type == property_type)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct TenantFilter {
    pub search: String,
    pub status: Option<TenantStatus>,
    pub property: Option<String>,
}

impl RecordFilter<Tenant> for TenantFilter {
    fn matches(&self, tenant: &Tenant) -> bool {
        text_matches(
            &self.search,
            &[&tenant.name, &tenant.email, &tenant.property, &tenant.unit],
        ) && self.status.is_none_or(|status| tenant.status == status)
            && self
                .property
                .as_deref()
                .is_none_or(|property| tenant.property == property)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub search: String,
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
}

impl RecordFilter<Payment> for PaymentFilter {
    fn matches(&self, payment: &Payment) -> bool {
        text_matches(
            &self.search,
            &[&payment.tenant, &payment.property, &payment.unit],
        ) && self.status.is_none_or(|status| payment.status == status)
            && self.method.is_none_or(|method| payment.method == method)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub search: String,
    pub kind: Option<NotificationKind>,
    /// `Some(false)` narrows to unread, `Some(true)` to read.
    pub read: Option<bool>,
}

impl RecordFilter<Notification> for NotificationFilter {
    fn matches(&self, notification: &Notification) -> bool {
        text_matches(
            &self.search,
            &[&notification.title, &notification.message],
        ) && self.kind.is_none_or(|kind| notification.kind == kind)
            && self.read.is_none_or(|read| notification.read == read)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::id::EntityId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lease(id: i64, tenant: &str, unit: &str, status: LeaseStatus) -> Lease {
        Lease {
            id: EntityId::from_millis(id),
            tenant: tenant.into(),
            unit: unit.into(),
            start_date: date(2024, 1, 1),
            end_date: date(2025, 1, 1),
            rent_amount: 1200,
            deposit: 1200,
            status,
            lease_type: LeaseType::Yearly,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_leases() -> Vec<Lease> {
        vec![
            lease(1, "Sarah Johnson", "Apt 101", LeaseStatus::Active),
            lease(2, "Mike Chen", "Apt 205", LeaseStatus::Active),
            lease(3, "Emma Davis", "Unit 3B", LeaseStatus::Expired),
            lease(4, "Carlos Ortiz", "Apt 102", LeaseStatus::Terminated),
        ]
    }

    #[test]
    fn empty_search_matches_everything() {
        let leases = sample_leases();
        let filter = LeaseFilter::default();
        assert_eq!(apply(&leases, &filter).len(), leases.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let leases = sample_leases();
        let filter = LeaseFilter {
            search: "sArAh".into(),
            ..Default::default()
        };
        let result = apply(&leases, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].tenant, "Sarah Johnson");

        // Substring of a unit field also counts.
        let filter = LeaseFilter {
            search: "apt".into(),
            ..Default::default()
        };
        assert_eq!(apply(&leases, &filter).len(), 3);
    }

    #[test]
    fn search_covers_status_label() {
        let leases = sample_leases();
        let filter = LeaseFilter {
            search: "expired".into(),
            ..Default::default()
        };
        let result = apply(&leases, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].tenant, "Emma Davis");
    }

    #[test]
    fn categorical_filter_is_exact() {
        let leases = sample_leases();
        let filter = LeaseFilter {
            status: Some(LeaseStatus::Active),
            ..Default::default()
        };
        let result = apply(&leases, &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|l| l.status == LeaseStatus::Active));
    }

    #[test]
    fn search_and_categorical_combine_with_and() {
        let leases = sample_leases();
        let filter = LeaseFilter {
            search: "apt".into(),
            status: Some(LeaseStatus::Active),
            ..Default::default()
        };
        assert_eq!(apply(&leases, &filter).len(), 2);
    }

    #[test]
    fn filtering_is_idempotent() {
        let leases = sample_leases();
        let filter = LeaseFilter {
            search: "a".into(),
            status: Some(LeaseStatus::Active),
            ..Default::default()
        };
        let once = apply(&leases, &filter);
        let twice = apply(&once, &filter);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn order_is_preserved() {
        let leases = sample_leases();
        let filter = LeaseFilter {
            search: "apt".into(),
            ..Default::default()
        };
        let ids: Vec<i64> = apply(&leases, &filter)
            .iter()
            .map(|l| l.id.as_millis())
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn clear_resets_every_criterion() {
        let leases = sample_leases();
        let mut filter = LeaseFilter {
            search: "no such tenant".into(),
            status: Some(LeaseStatus::Expired),
            lease_type: Some(LeaseType::Monthly),
        };
        assert!(apply(&leases, &filter).is_empty());

        filter.clear();
        assert_eq!(apply(&leases, &filter).len(), leases.len());
    }

    #[test]
    fn maintenance_filter_searches_assignee() {
        let request = MaintenanceRequest {
            id: EntityId::from_millis(10),
            property: "Sunset Apartments".into(),
            unit: "Apt 101".into(),
            tenant: "Sarah Johnson".into(),
            issue: "Leaking faucet".into(),
            description: "Kitchen faucet drips constantly".into(),
            priority: Priority::Medium,
            status: MaintenanceStatus::Pending,
            reported_on: date(2024, 3, 2),
            assigned_to: Some("Bob's Plumbing".into()),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let filter = MaintenanceFilter {
            search: "plumbing".into(),
            ..Default::default()
        };
        assert!(filter.matches(&request));

        let filter = MaintenanceFilter {
            search: "electric".into(),
            ..Default::default()
        };
        assert!(!filter.matches(&request));
    }
}
