//! In-memory implementation of [`PaymentStore`].

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tenura_core::id::IdGenerator;
use tenura_core::models::payment::{CreatePayment, Payment, UpdatePayment};
use tenura_core::store::PaymentStore;
use tenura_core::{EntityId, TenuraResult};

use crate::error::StoreError;

#[derive(Clone, Default)]
pub struct InMemoryPaymentStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: RwLock<Vec<Payment>>,
    ids: IdGenerator,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: EntityId) -> StoreError {
        StoreError::NotFound {
            entity: "payment".into(),
            id: id.to_string(),
        }
    }
}

impl PaymentStore for InMemoryPaymentStore {
    async fn add(&self, input: CreatePayment) -> TenuraResult<Payment> {
        let payment = Payment {
            id: self.inner.ids.next(),
            tenant: input.tenant,
            property: input.property,
            unit: input.unit,
            amount: input.amount,
            paid_on: input.paid_on,
            method: input.method,
            status: input.status,
            created_at: Utc::now(),
        };

        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        records.push(payment.clone());
        Ok(payment)
    }

    async fn get(&self, id: EntityId) -> TenuraResult<Payment> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let payment = records
            .iter()
            .find(|payment| payment.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(payment.clone())
    }

    async fn update(&self, id: EntityId, patch: UpdatePayment) -> TenuraResult<Payment> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let payment = records
            .iter_mut()
            .find(|payment| payment.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        patch.apply(payment);
        Ok(payment.clone())
    }

    async fn remove(&self, id: EntityId) -> TenuraResult<()> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|payment| payment.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }

    async fn list(&self) -> TenuraResult<Vec<Payment>> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }
}
