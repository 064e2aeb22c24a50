//! Report builders — pure projections over record slices.

use serde::Serialize;
use tenura_core::models::lease::{Lease, LeaseStatus};
use tenura_core::models::maintenance::{MaintenanceRequest, MaintenanceStatus, Priority};
use tenura_core::models::payment::{Payment, PaymentStatus};
use tenura_core::models::property::Property;

#[derive(Debug, Clone, Serialize)]
pub struct PropertyOccupancy {
    pub name: String,
    pub occupied: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupancySummary {
    pub properties: Vec<PropertyOccupancy>,
    pub occupied_units: u32,
    pub total_units: u32,
}

impl OccupancySummary {
    /// Portfolio-wide occupancy in [0, 1]; 0 for an empty portfolio.
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_units == 0 {
            return 0.0;
        }
        f64::from(self.occupied_units) / f64::from(self.total_units)
    }
}

pub fn occupancy_summary(properties: &[Property]) -> OccupancySummary {
    let mut summary = OccupancySummary {
        properties: Vec::with_capacity(properties.len()),
        occupied_units: 0,
        total_units: 0,
    };
    for property in properties {
        summary.occupied_units += property.occupied_units;
        summary.total_units += property.total_units;
        summary.properties.push(PropertyOccupancy {
            name: property.name.clone(),
            occupied: property.occupied_units,
            total: property.total_units,
        });
    }
    summary
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct RentRoll {
    pub active_leases: usize,
    /// Sum of monthly rents across active leases.
    pub monthly_total: u64,
}

pub fn rent_roll(leases: &[Lease]) -> RentRoll {
    let mut roll = RentRoll::default();
    for lease in leases.iter().filter(|l| l.status == LeaseStatus::Active) {
        roll.active_leases += 1;
        roll.monthly_total += u64::from(lease.rent_amount);
    }
    roll
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct MaintenanceBreakdown {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl MaintenanceBreakdown {
    /// Requests still needing attention.
    pub fn open(&self) -> usize {
        self.pending + self.in_progress
    }
}

pub fn maintenance_breakdown(requests: &[MaintenanceRequest]) -> MaintenanceBreakdown {
    let mut breakdown = MaintenanceBreakdown::default();
    for request in requests {
        match request.status {
            MaintenanceStatus::Pending => breakdown.pending += 1,
            MaintenanceStatus::InProgress => breakdown.in_progress += 1,
            MaintenanceStatus::Completed => breakdown.completed += 1,
            MaintenanceStatus::Cancelled => breakdown.cancelled += 1,
        }
        match request.priority {
            Priority::Low => breakdown.low += 1,
            Priority::Medium => breakdown.medium += 1,
            Priority::High => breakdown.high += 1,
        }
    }
    breakdown
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct PaymentSummary {
    pub collected: u64,
    pub pending: u64,
    pub failed_count: usize,
}

pub fn payment_summary(payments: &[Payment]) -> PaymentSummary {
    let mut summary = PaymentSummary::default();
    for payment in payments {
        match payment.status {
            PaymentStatus::Completed => summary.collected += u64::from(payment.amount),
            PaymentStatus::Pending => summary.pending += u64::from(payment.amount),
            PaymentStatus::Failed => summary.failed_count += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use tenura_core::models::lease::LeaseType;
    use tenura_core::models::payment::PaymentMethod;
    use tenura_core::models::property::PropertyStatus;
    use tenura_core::EntityId;

    use super::*;

    fn property(name: &str, occupied: u32, total: u32) -> Property {
        Property {
            id: EntityId::from_millis(1),
            name: name.into(),
            address: String::new(),
            description: String::new(),
            property_type: "apartment".into(),
            total_units: total,
            occupied_units: occupied,
            status: PropertyStatus::Active,
            rent_amount: 1200,
            amenities: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn occupancy_summary_totals_portfolio() {
        let summary = occupancy_summary(&[
            property("Sunset Apartments", 10, 12),
            property("Oak Grove Duplex", 2, 2),
            property("Maple Court", 3, 6),
        ]);
        assert_eq!(summary.occupied_units, 15);
        assert_eq!(summary.total_units, 20);
        assert!((summary.occupancy_rate() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn occupancy_rate_of_empty_portfolio_is_zero() {
        let summary = occupancy_summary(&[]);
        assert_eq!(summary.occupancy_rate(), 0.0);
    }

    #[test]
    fn rent_roll_counts_only_active_leases() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let lease = |status, rent| Lease {
            id: EntityId::from_millis(1),
            tenant: "T".into(),
            unit: "U".into(),
            start_date: date,
            end_date: date,
            rent_amount: rent,
            deposit: rent,
            status,
            lease_type: LeaseType::Yearly,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let roll = rent_roll(&[
            lease(LeaseStatus::Active, 1200),
            lease(LeaseStatus::Active, 1250),
            lease(LeaseStatus::Expired, 1450),
        ]);
        assert_eq!(roll.active_leases, 2);
        assert_eq!(roll.monthly_total, 2450);
    }

    #[test]
    fn payment_summary_splits_by_status() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let payment = |status, amount| Payment {
            id: EntityId::from_millis(1),
            tenant: "T".into(),
            property: "P".into(),
            unit: "U".into(),
            amount,
            paid_on: date,
            method: PaymentMethod::Card,
            status,
            created_at: Utc::now(),
        };

        let summary = payment_summary(&[
            payment(PaymentStatus::Completed, 1200),
            payment(PaymentStatus::Completed, 1250),
            payment(PaymentStatus::Pending, 1350),
            payment(PaymentStatus::Failed, 900),
        ]);
        assert_eq!(summary.collected, 2450);
        assert_eq!(summary.pending, 1350);
        assert_eq!(summary.failed_count, 1);
    }
}
