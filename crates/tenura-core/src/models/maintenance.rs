//! Maintenance request domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: EntityId,
    pub property: String,
    pub unit: String,
    pub tenant: String,
    /// Short issue title (e.g. `Leaking faucet`).
    pub issue: String,
    pub description: String,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub reported_on: NaiveDate,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub property: String,
    pub unit: String,
    pub tenant: String,
    pub issue: String,
    pub description: String,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub reported_on: NaiveDate,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateMaintenanceRequest {
    pub property: Option<String>,
    pub unit: Option<String>,
    pub tenant: Option<String>,
    pub issue: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<MaintenanceStatus>,
    pub reported_on: Option<NaiveDate>,
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub assigned_to: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl UpdateMaintenanceRequest {
    /// Shallow-merge the set fields onto `request`.
    pub fn apply(self, request: &mut MaintenanceRequest) {
        if let Some(property) = self.property {
            request.property = property;
        }
        if let Some(unit) = self.unit {
            request.unit = unit;
        }
        if let Some(tenant) = self.tenant {
            request.tenant = tenant;
        }
        if let Some(issue) = self.issue {
            request.issue = issue;
        }
        if let Some(description) = self.description {
            request.description = description;
        }
        if let Some(priority) = self.priority {
            request.priority = priority;
        }
        if let Some(status) = self.status {
            request.status = status;
        }
        if let Some(reported_on) = self.reported_on {
            request.reported_on = reported_on;
        }
        if let Some(assigned_to) = self.assigned_to {
            request.assigned_to = assigned_to;
        }
        if let Some(notes) = self.notes {
            request.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_in_snake_case() {
        assert_eq!(
            serde_json::to_value(MaintenanceStatus::InProgress).unwrap(),
            serde_json::json!("in_progress")
        );
        assert_eq!(
            serde_json::to_value(Priority::High).unwrap(),
            serde_json::json!("high")
        );
    }

    #[test]
    fn status_labels_match_wire_form() {
        for status in [
            MaintenanceStatus::Pending,
            MaintenanceStatus::InProgress,
            MaintenanceStatus::Completed,
            MaintenanceStatus::Cancelled,
        ] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.as_str())
            );
        }
    }
}
