//! Reference lookup tables for dependent-field rules.
//!
//! Every lookup returns an `Option` — a miss is the caller's decision to
//! handle, never a silent fallback.

use std::collections::HashMap;

use tenura_core::models::tenant::Tenant;

/// The unit and rent a tenant is on record for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantUnit {
    pub unit: String,
    pub rent_amount: u32,
}

/// Typed maps backing the form binders: tenant → unit/rent,
/// property → units, unit → tenant.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    tenant_units: HashMap<String, TenantUnit>,
    property_units: HashMap<String, Vec<String>>,
    unit_tenants: HashMap<String, String>,
}

impl ReferenceData {
    /// Build all three maps from the tenant roster.
    pub fn from_records(tenants: &[Tenant]) -> Self {
        let mut reference = Self::default();
        for tenant in tenants {
            reference.tenant_units.insert(
                tenant.name.clone(),
                TenantUnit {
                    unit: tenant.unit.clone(),
                    rent_amount: tenant.rent_amount,
                },
            );
            reference
                .property_units
                .entry(tenant.property.clone())
                .or_default()
                .push(tenant.unit.clone());
            reference
                .unit_tenants
                .insert(tenant.unit.clone(), tenant.name.clone());
        }
        reference
    }

    pub fn tenant_unit(&self, tenant: &str) -> Option<&TenantUnit> {
        self.tenant_units.get(tenant)
    }

    pub fn units_for(&self, property: &str) -> Option<&[String]> {
        self.property_units.get(property).map(Vec::as_slice)
    }

    pub fn tenant_for_unit(&self, unit: &str) -> Option<&str> {
        self.unit_tenants.get(unit).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono::Utc;
    use tenura_core::models::tenant::TenantStatus;
    use tenura_core::EntityId;

    use super::*;

    fn tenant(name: &str, property: &str, unit: &str, rent: u32) -> Tenant {
        Tenant {
            id: EntityId::from_millis(1),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "555-0100".into(),
            property: property.into(),
            unit: unit.into(),
            rent_amount: rent,
            status: TenantStatus::Active,
            move_in: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn builds_all_three_maps() {
        let reference = ReferenceData::from_records(&[
            tenant("Sarah Johnson", "Sunset Apartments", "Apt 101", 1200),
            tenant("Mike Chen", "Sunset Apartments", "Apt 205", 1250),
            tenant("Emma Davis", "Oak Grove Duplex", "Unit A", 1450),
        ]);

        let entry = reference.tenant_unit("Sarah Johnson").unwrap();
        assert_eq!(entry.unit, "Apt 101");
        assert_eq!(entry.rent_amount, 1200);

        let units = reference.units_for("Sunset Apartments").unwrap();
        assert_eq!(units, ["Apt 101", "Apt 205"]);

        assert_eq!(reference.tenant_for_unit("Unit A"), Some("Emma Davis"));
    }

    #[test]
    fn misses_are_none() {
        let reference = ReferenceData::from_records(&[]);
        assert!(reference.tenant_unit("Nobody").is_none());
        assert!(reference.units_for("Nowhere").is_none());
        assert!(reference.tenant_for_unit("Apt 999").is_none());
    }
}
