//! In-memory implementation of [`PropertyStore`].
//!
//! The one store with a semantic invariant: a property can never report
//! more occupied units than it has.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tenura_core::id::IdGenerator;
use tenura_core::models::property::{CreateProperty, Property, UpdateProperty};
use tenura_core::store::PropertyStore;
use tenura_core::{EntityId, TenuraResult};

use crate::error::StoreError;

#[derive(Clone, Default)]
pub struct InMemoryPropertyStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: RwLock<Vec<Property>>,
    ids: IdGenerator,
}

fn check_occupancy(occupied: u32, total: u32) -> Result<(), StoreError> {
    if occupied > total {
        return Err(StoreError::Occupancy { occupied, total });
    }
    Ok(())
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: EntityId) -> StoreError {
        StoreError::NotFound {
            entity: "property".into(),
            id: id.to_string(),
        }
    }
}

impl PropertyStore for InMemoryPropertyStore {
    async fn add(&self, input: CreateProperty) -> TenuraResult<Property> {
        check_occupancy(input.occupied_units, input.total_units)?;

        let now = Utc::now();
        let property = Property {
            id: self.inner.ids.next(),
            name: input.name,
            address: input.address,
            description: input.description,
            property_type: input.property_type,
            total_units: input.total_units,
            occupied_units: input.occupied_units,
            status: input.status,
            rent_amount: input.rent_amount,
            amenities: input.amenities,
            created_at: now,
            updated_at: now,
        };

        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        records.push(property.clone());
        tracing::debug!(id = %property.id, name = %property.name, "property added");
        Ok(property)
    }

    async fn get(&self, id: EntityId) -> TenuraResult<Property> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let property = records
            .iter()
            .find(|property| property.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(property.clone())
    }

    async fn update(&self, id: EntityId, patch: UpdateProperty) -> TenuraResult<Property> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|property| property.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        // Merge into a working copy so a rejected patch leaves the
        // stored record untouched.
        let mut candidate = records[index].clone();
        patch.apply(&mut candidate);
        check_occupancy(candidate.occupied_units, candidate.total_units)?;
        candidate.updated_at = Utc::now();

        records[index] = candidate.clone();
        Ok(candidate)
    }

    async fn remove(&self, id: EntityId) -> TenuraResult<()> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|property| property.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }

    async fn list(&self) -> TenuraResult<Vec<Property>> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }
}
