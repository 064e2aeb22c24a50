//! In-memory implementation of [`MaintenanceStore`].

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tenura_core::id::IdGenerator;
use tenura_core::models::maintenance::{
    CreateMaintenanceRequest, MaintenanceRequest, UpdateMaintenanceRequest,
};
use tenura_core::store::MaintenanceStore;
use tenura_core::{EntityId, TenuraResult};

use crate::error::StoreError;

#[derive(Clone, Default)]
pub struct InMemoryMaintenanceStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: RwLock<Vec<MaintenanceRequest>>,
    ids: IdGenerator,
}

impl InMemoryMaintenanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: EntityId) -> StoreError {
        StoreError::NotFound {
            entity: "maintenance_request".into(),
            id: id.to_string(),
        }
    }
}

impl MaintenanceStore for InMemoryMaintenanceStore {
    async fn add(&self, input: CreateMaintenanceRequest) -> TenuraResult<MaintenanceRequest> {
        let now = Utc::now();
        let request = MaintenanceRequest {
            id: self.inner.ids.next(),
            property: input.property,
            unit: input.unit,
            tenant: input.tenant,
            issue: input.issue,
            description: input.description,
            priority: input.priority,
            status: input.status,
            reported_on: input.reported_on,
            assigned_to: input.assigned_to,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };

        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        records.push(request.clone());
        tracing::debug!(id = %request.id, issue = %request.issue, "maintenance request added");
        Ok(request)
    }

    async fn get(&self, id: EntityId) -> TenuraResult<MaintenanceRequest> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let request = records
            .iter()
            .find(|request| request.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(request.clone())
    }

    async fn update(
        &self,
        id: EntityId,
        patch: UpdateMaintenanceRequest,
    ) -> TenuraResult<MaintenanceRequest> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let request = records
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        patch.apply(request);
        request.updated_at = Utc::now();
        Ok(request.clone())
    }

    async fn remove(&self, id: EntityId) -> TenuraResult<()> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|request| request.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }

    async fn list(&self) -> TenuraResult<Vec<MaintenanceRequest>> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }
}
