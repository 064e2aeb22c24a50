//! In-memory implementation of [`TenantStore`].

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tenura_core::id::IdGenerator;
use tenura_core::models::tenant::{CreateTenant, Tenant, UpdateTenant};
use tenura_core::store::TenantStore;
use tenura_core::{EntityId, TenuraResult};

use crate::error::StoreError;

#[derive(Clone, Default)]
pub struct InMemoryTenantStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: RwLock<Vec<Tenant>>,
    ids: IdGenerator,
}

impl InMemoryTenantStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: EntityId) -> StoreError {
        StoreError::NotFound {
            entity: "tenant".into(),
            id: id.to_string(),
        }
    }
}

impl TenantStore for InMemoryTenantStore {
    async fn add(&self, input: CreateTenant) -> TenuraResult<Tenant> {
        let now = Utc::now();
        let tenant = Tenant {
            id: self.inner.ids.next(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            property: input.property,
            unit: input.unit,
            rent_amount: input.rent_amount,
            status: input.status,
            move_in: input.move_in,
            created_at: now,
            updated_at: now,
        };

        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        records.push(tenant.clone());
        Ok(tenant)
    }

    async fn get(&self, id: EntityId) -> TenuraResult<Tenant> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let tenant = records
            .iter()
            .find(|tenant| tenant.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(tenant.clone())
    }

    async fn update(&self, id: EntityId, patch: UpdateTenant) -> TenuraResult<Tenant> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let tenant = records
            .iter_mut()
            .find(|tenant| tenant.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        patch.apply(tenant);
        tenant.updated_at = Utc::now();
        Ok(tenant.clone())
    }

    async fn remove(&self, id: EntityId) -> TenuraResult<()> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|tenant| tenant.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }

    async fn list(&self) -> TenuraResult<Vec<Tenant>> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }
}
