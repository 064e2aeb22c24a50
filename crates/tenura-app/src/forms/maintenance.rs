//! Maintenance request form binder.

use chrono::NaiveDate;
use tenura_core::models::maintenance::{
    CreateMaintenanceRequest, MaintenanceRequest, MaintenanceStatus, Priority,
    UpdateMaintenanceRequest,
};
use tenura_core::store::MaintenanceStore;
use tenura_core::EntityId;

use crate::error::{FormError, FormWarning};
use crate::lookup::ReferenceData;

/// Working copy of a maintenance request prior to submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceDraft {
    pub property: String,
    pub unit: String,
    pub tenant: String,
    pub issue: String,
    pub description: String,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub reported_on: Option<NaiveDate>,
    pub assigned_to: String,
    pub notes: String,
}

impl Default for MaintenanceDraft {
    fn default() -> Self {
        Self {
            property: String::new(),
            unit: String::new(),
            tenant: String::new(),
            issue: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            status: MaintenanceStatus::Pending,
            reported_on: None,
            assigned_to: String::new(),
            notes: String::new(),
        }
    }
}

/// Controlled maintenance form: a draft, the id under edit, and the
/// unit choice set derived from the selected property.
#[derive(Debug, Default)]
pub struct MaintenanceForm {
    draft: MaintenanceDraft,
    editing: Option<EntityId>,
    available_units: Vec<String>,
    warnings: Vec<FormWarning>,
}

impl MaintenanceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(request: &MaintenanceRequest) -> Self {
        Self {
            draft: MaintenanceDraft {
                property: request.property.clone(),
                unit: request.unit.clone(),
                tenant: request.tenant.clone(),
                issue: request.issue.clone(),
                description: request.description.clone(),
                priority: request.priority,
                status: request.status,
                reported_on: Some(request.reported_on),
                assigned_to: request.assigned_to.clone().unwrap_or_default(),
                notes: request.notes.clone().unwrap_or_default(),
            },
            editing: Some(request.id),
            available_units: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn draft(&self) -> &MaintenanceDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Unit choices for the currently selected property.
    pub fn available_units(&self) -> &[String] {
        &self.available_units
    }

    pub fn warnings(&self) -> &[FormWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<FormWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Dependent-field rule: selecting a property repopulates the unit
    /// choice set and clears both the unit and tenant drafts. An unknown
    /// property leaves the choice set empty and records a warning.
    pub fn select_property(&mut self, reference: &ReferenceData, property: &str) {
        self.draft.property = property.to_string();
        self.draft.unit.clear();
        self.draft.tenant.clear();
        match reference.units_for(property) {
            Some(units) => self.available_units = units.to_vec(),
            None => {
                self.available_units.clear();
                self.warnings
                    .push(FormWarning::UnknownProperty(property.to_string()));
            }
        }
    }

    /// Dependent-field rule: selecting a unit auto-fills the tenant on
    /// record for it. A unit with no tenant records a warning and leaves
    /// the tenant draft untouched.
    pub fn select_unit(&mut self, reference: &ReferenceData, unit: &str) {
        self.draft.unit = unit.to_string();
        match reference.tenant_for_unit(unit) {
            Some(tenant) => self.draft.tenant = tenant.to_string(),
            None => self
                .warnings
                .push(FormWarning::UnassignedUnit(unit.to_string())),
        }
    }

    pub fn set_issue(&mut self, issue: &str) {
        self.draft.issue = issue.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    pub fn set_status(&mut self, status: MaintenanceStatus) {
        self.draft.status = status;
    }

    pub fn set_reported_on(&mut self, reported_on: NaiveDate) {
        self.draft.reported_on = Some(reported_on);
    }

    pub fn set_assigned_to(&mut self, assigned_to: &str) {
        self.draft.assigned_to = assigned_to.to_string();
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.draft.notes = notes.to_string();
    }

    /// Persist the draft: update the record under edit, or append a new
    /// one. On success the form resets to its default draft.
    pub async fn submit<S: MaintenanceStore>(
        &mut self,
        store: &S,
    ) -> Result<MaintenanceRequest, FormError> {
        if self.draft.property.trim().is_empty() {
            return Err(FormError::MissingField("property"));
        }
        if self.draft.unit.trim().is_empty() {
            return Err(FormError::MissingField("unit"));
        }
        if self.draft.issue.trim().is_empty() {
            return Err(FormError::MissingField("issue"));
        }
        let reported_on = self
            .draft
            .reported_on
            .ok_or(FormError::MissingField("reported_on"))?;

        let assigned_to = match self.draft.assigned_to.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };
        let notes = match self.draft.notes.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };

        let request = match self.editing {
            Some(id) => {
                store
                    .update(
                        id,
                        UpdateMaintenanceRequest {
                            property: Some(self.draft.property.clone()),
                            unit: Some(self.draft.unit.clone()),
                            tenant: Some(self.draft.tenant.clone()),
                            issue: Some(self.draft.issue.clone()),
                            description: Some(self.draft.description.clone()),
                            priority: Some(self.draft.priority),
                            status: Some(self.draft.status),
                            reported_on: Some(reported_on),
                            assigned_to: Some(assigned_to),
                            notes: Some(notes),
                        },
                    )
                    .await?
            }
            None => {
                store
                    .add(CreateMaintenanceRequest {
                        property: self.draft.property.clone(),
                        unit: self.draft.unit.clone(),
                        tenant: self.draft.tenant.clone(),
                        issue: self.draft.issue.clone(),
                        description: self.draft.description.clone(),
                        priority: self.draft.priority,
                        status: self.draft.status,
                        reported_on,
                        assigned_to,
                        notes,
                    })
                    .await?
            }
        };

        *self = Self::new();
        Ok(request)
    }
}
