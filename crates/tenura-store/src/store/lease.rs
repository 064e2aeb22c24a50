//! In-memory implementation of [`LeaseStore`].

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tenura_core::id::IdGenerator;
use tenura_core::models::lease::{CreateLease, Lease, UpdateLease};
use tenura_core::store::LeaseStore;
use tenura_core::{EntityId, TenuraResult};

use crate::error::StoreError;

/// In-memory lease collection. Cheap to clone; clones share the same
/// underlying records.
#[derive(Clone, Default)]
pub struct InMemoryLeaseStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: RwLock<Vec<Lease>>,
    ids: IdGenerator,
}

impl InMemoryLeaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: EntityId) -> StoreError {
        StoreError::NotFound {
            entity: "lease".into(),
            id: id.to_string(),
        }
    }
}

impl LeaseStore for InMemoryLeaseStore {
    async fn add(&self, input: CreateLease) -> TenuraResult<Lease> {
        let now = Utc::now();
        let lease = Lease {
            id: self.inner.ids.next(),
            tenant: input.tenant,
            unit: input.unit,
            start_date: input.start_date,
            end_date: input.end_date,
            rent_amount: input.rent_amount,
            deposit: input.deposit,
            status: input.status,
            lease_type: input.lease_type,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };

        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        records.push(lease.clone());
        tracing::debug!(id = %lease.id, tenant = %lease.tenant, "lease added");
        Ok(lease)
    }

    async fn get(&self, id: EntityId) -> TenuraResult<Lease> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let lease = records
            .iter()
            .find(|lease| lease.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(lease.clone())
    }

    async fn update(&self, id: EntityId, patch: UpdateLease) -> TenuraResult<Lease> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let lease = records
            .iter_mut()
            .find(|lease| lease.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        patch.apply(lease);
        lease.updated_at = Utc::now();
        Ok(lease.clone())
    }

    async fn remove(&self, id: EntityId) -> TenuraResult<()> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|lease| lease.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        tracing::debug!(%id, "lease removed");
        Ok(())
    }

    async fn list(&self) -> TenuraResult<Vec<Lease>> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }
}
