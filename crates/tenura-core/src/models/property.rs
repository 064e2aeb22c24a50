//! Property domain model.
//!
//! Properties are the owner-facing aggregate: unit capacity, occupancy,
//! and the amenity list shown on the portfolio views. The occupancy
//! invariant (`occupied_units <= total_units`) is enforced by the store,
//! not by the type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Active,
    Maintenance,
    Vacant,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Vacant => "vacant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub description: String,
    /// Free-form building category (e.g. `apartment`, `duplex`).
    pub property_type: String,
    pub total_units: u32,
    pub occupied_units: u32,
    pub status: PropertyStatus,
    /// Base monthly rent per unit in whole currency units.
    pub rent_amount: u32,
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProperty {
    pub name: String,
    pub address: String,
    pub description: String,
    pub property_type: String,
    pub total_units: u32,
    pub occupied_units: u32,
    pub status: PropertyStatus,
    pub rent_amount: u32,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<String>,
    pub total_units: Option<u32>,
    pub occupied_units: Option<u32>,
    pub status: Option<PropertyStatus>,
    pub rent_amount: Option<u32>,
    pub amenities: Option<Vec<String>>,
}

impl UpdateProperty {
    /// Shallow-merge the set fields onto `property`.
    pub fn apply(self, property: &mut Property) {
        if let Some(name) = self.name {
            property.name = name;
        }
        if let Some(address) = self.address {
            property.address = address;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(total_units) = self.total_units {
            property.total_units = total_units;
        }
        if let Some(occupied_units) = self.occupied_units {
            property.occupied_units = occupied_units;
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(rent_amount) = self.rent_amount {
            property.rent_amount = rent_amount;
        }
        if let Some(amenities) = self.amenities {
            property.amenities = amenities;
        }
    }
}
