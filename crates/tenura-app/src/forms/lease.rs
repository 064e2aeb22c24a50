//! Lease form binder.

use chrono::{Months, NaiveDate};
use tenura_core::models::lease::{CreateLease, Lease, LeaseStatus, LeaseType, UpdateLease};
use tenura_core::store::LeaseStore;
use tenura_core::EntityId;

use crate::error::{FormError, FormWarning};
use crate::forms::parse_amount;
use crate::lookup::ReferenceData;

/// Working copy of a lease prior to submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseDraft {
    pub tenant: String,
    pub unit: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rent_amount: u32,
    pub deposit: u32,
    pub status: LeaseStatus,
    pub lease_type: LeaseType,
    pub notes: String,
}

impl Default for LeaseDraft {
    fn default() -> Self {
        Self {
            tenant: String::new(),
            unit: String::new(),
            start_date: None,
            end_date: None,
            rent_amount: 0,
            deposit: 0,
            status: LeaseStatus::Active,
            lease_type: LeaseType::Monthly,
            notes: String::new(),
        }
    }
}

/// Lease end date for a term starting at `start`: monthly and yearly
/// leases run a year, quarterly leases three months. Month-end dates
/// clamp (Jan 31 + 3 months = Apr 30).
pub fn lease_term_end(lease_type: LeaseType, start: NaiveDate) -> Option<NaiveDate> {
    let months = match lease_type {
        LeaseType::Monthly | LeaseType::Yearly => 12,
        LeaseType::Quarterly => 3,
    };
    start.checked_add_months(Months::new(months))
}

/// Controlled lease form: a draft plus the id under edit, if any.
#[derive(Debug, Default)]
pub struct LeaseForm {
    draft: LeaseDraft,
    editing: Option<EntityId>,
    warnings: Vec<FormWarning>,
}

impl LeaseForm {
    /// Blank form for creating a new lease.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record.
    pub fn edit(lease: &Lease) -> Self {
        Self {
            draft: LeaseDraft {
                tenant: lease.tenant.clone(),
                unit: lease.unit.clone(),
                start_date: Some(lease.start_date),
                end_date: Some(lease.end_date),
                rent_amount: lease.rent_amount,
                deposit: lease.deposit,
                status: lease.status,
                lease_type: lease.lease_type,
                notes: lease.notes.clone().unwrap_or_default(),
            },
            editing: Some(lease.id),
            warnings: Vec::new(),
        }
    }

    pub fn draft(&self) -> &LeaseDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn warnings(&self) -> &[FormWarning] {
        &self.warnings
    }

    /// Drain accumulated warnings.
    pub fn take_warnings(&mut self) -> Vec<FormWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Dependent-field rule: a known tenant fills in unit and rent from
    /// the roster, and the deposit defaults to that rent. An unknown
    /// tenant sets only the name and records a warning — the dependent
    /// fields are left untouched rather than silently going stale.
    pub fn select_tenant(&mut self, reference: &ReferenceData, name: &str) {
        self.draft.tenant = name.to_string();
        match reference.tenant_unit(name) {
            Some(entry) => {
                self.draft.unit = entry.unit.clone();
                self.draft.rent_amount = entry.rent_amount;
                self.draft.deposit = entry.rent_amount;
            }
            None => self
                .warnings
                .push(FormWarning::UnknownTenant(name.to_string())),
        }
    }

    pub fn set_unit(&mut self, unit: &str) {
        self.draft.unit = unit.to_string();
    }

    /// Dependent-field rule: changing the rent also resets the deposit
    /// to the new rent.
    pub fn set_rent_amount(&mut self, amount: u32) {
        self.draft.rent_amount = amount;
        self.draft.deposit = amount;
    }

    /// Text-field variant of [`Self::set_rent_amount`].
    pub fn set_rent_amount_text(&mut self, text: &str) {
        self.set_rent_amount(parse_amount(text));
    }

    /// The deposit stays independently editable after the rent rule
    /// has defaulted it.
    pub fn set_deposit(&mut self, amount: u32) {
        self.draft.deposit = amount;
    }

    /// Dependent-field rule: a new start date recomputes the end date
    /// from the current lease type.
    pub fn set_start_date(&mut self, start: NaiveDate) {
        self.draft.start_date = Some(start);
        if let Some(end) = lease_term_end(self.draft.lease_type, start) {
            self.draft.end_date = Some(end);
        }
    }

    pub fn set_end_date(&mut self, end: NaiveDate) {
        self.draft.end_date = Some(end);
    }

    /// Changing the type alone does not recompute the end date; the
    /// next start-date edit applies the new term length.
    pub fn set_lease_type(&mut self, lease_type: LeaseType) {
        self.draft.lease_type = lease_type;
    }

    pub fn set_status(&mut self, status: LeaseStatus) {
        self.draft.status = status;
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.draft.notes = notes.to_string();
    }

    /// Persist the draft: update the record under edit, or append a new
    /// one. On success the form resets to its default draft.
    pub async fn submit<S: LeaseStore>(&mut self, store: &S) -> Result<Lease, FormError> {
        // 1. Required fields (the native-validation floor).
        if self.draft.tenant.trim().is_empty() {
            return Err(FormError::MissingField("tenant"));
        }
        if self.draft.unit.trim().is_empty() {
            return Err(FormError::MissingField("unit"));
        }
        let start_date = self
            .draft
            .start_date
            .ok_or(FormError::MissingField("start_date"))?;
        let end_date = self
            .draft
            .end_date
            .ok_or(FormError::MissingField("end_date"))?;

        let notes = match self.draft.notes.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };

        // 2. Update under edit, otherwise create.
        let lease = match self.editing {
            Some(id) => {
                store
                    .update(
                        id,
                        UpdateLease {
                            tenant: Some(self.draft.tenant.clone()),
                            unit: Some(self.draft.unit.clone()),
                            start_date: Some(start_date),
                            end_date: Some(end_date),
                            rent_amount: Some(self.draft.rent_amount),
                            deposit: Some(self.draft.deposit),
                            status: Some(self.draft.status),
                            lease_type: Some(self.draft.lease_type),
                            notes: Some(notes),
                        },
                    )
                    .await?
            }
            None => {
                store
                    .add(CreateLease {
                        tenant: self.draft.tenant.clone(),
                        unit: self.draft.unit.clone(),
                        start_date,
                        end_date,
                        rent_amount: self.draft.rent_amount,
                        deposit: self.draft.deposit,
                        status: self.draft.status,
                        lease_type: self.draft.lease_type,
                        notes,
                    })
                    .await?
            }
        };

        // 3. Clear back to the default draft.
        *self = Self::new();
        Ok(lease)
    }
}
