//! In-memory implementation of [`NotificationStore`].

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tenura_core::id::IdGenerator;
use tenura_core::models::notification::{CreateNotification, Notification};
use tenura_core::store::NotificationStore;
use tenura_core::{EntityId, TenuraResult};

use crate::error::StoreError;

#[derive(Clone, Default)]
pub struct InMemoryNotificationStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: RwLock<Vec<Notification>>,
    ids: IdGenerator,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: EntityId) -> StoreError {
        StoreError::NotFound {
            entity: "notification".into(),
            id: id.to_string(),
        }
    }
}

impl NotificationStore for InMemoryNotificationStore {
    async fn add(&self, input: CreateNotification) -> TenuraResult<Notification> {
        let now = Utc::now();
        let notification = Notification {
            id: self.inner.ids.next(),
            title: input.title,
            message: input.message,
            kind: input.kind,
            sent_at: now,
            read: false,
            created_at: now,
        };

        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        records.push(notification.clone());
        Ok(notification)
    }

    async fn get(&self, id: EntityId) -> TenuraResult<Notification> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        let notification = records
            .iter()
            .find(|notification| notification.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(notification.clone())
    }

    async fn mark_read(&self, id: EntityId) -> TenuraResult<Notification> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let notification = records
            .iter_mut()
            .find(|notification| notification.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        notification.read = true;
        Ok(notification.clone())
    }

    async fn mark_all_read(&self) -> TenuraResult<usize> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let mut changed = 0;
        for notification in records.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        Ok(changed)
    }

    async fn remove(&self, id: EntityId) -> TenuraResult<()> {
        let mut records = self
            .inner
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = records
            .iter()
            .position(|notification| notification.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }

    async fn list(&self) -> TenuraResult<Vec<Notification>> {
        let records = self
            .inner
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }
}
