//! Store trait definitions for data access abstraction.
//!
//! One trait per entity collection. All operations are async; the
//! collection order is insertion order, and `list` returns a snapshot in
//! that order. An operation against a missing id returns
//! [`TenuraError::NotFound`] and leaves the collection unchanged.

use std::future::Future;

use crate::error::TenuraResult;
use crate::id::EntityId;
use crate::models::{
    lease::{CreateLease, Lease, UpdateLease},
    maintenance::{CreateMaintenanceRequest, MaintenanceRequest, UpdateMaintenanceRequest},
    notification::{CreateNotification, Notification},
    payment::{CreatePayment, Payment, UpdatePayment},
    property::{CreateProperty, Property, UpdateProperty},
    tenant::{CreateTenant, Tenant, UpdateTenant},
};

pub trait LeaseStore: Send + Sync {
    /// Assign a fresh id, stamp timestamps, and append the record.
    fn add(&self, input: CreateLease) -> impl Future<Output = TenuraResult<Lease>> + Send;
    fn get(&self, id: EntityId) -> impl Future<Output = TenuraResult<Lease>> + Send;
    /// Shallow-merge `patch` onto the record with this id.
    fn update(
        &self,
        id: EntityId,
        patch: UpdateLease,
    ) -> impl Future<Output = TenuraResult<Lease>> + Send;
    fn remove(&self, id: EntityId) -> impl Future<Output = TenuraResult<()>> + Send;
    fn list(&self) -> impl Future<Output = TenuraResult<Vec<Lease>>> + Send;
}

pub trait MaintenanceStore: Send + Sync {
    fn add(
        &self,
        input: CreateMaintenanceRequest,
    ) -> impl Future<Output = TenuraResult<MaintenanceRequest>> + Send;
    fn get(&self, id: EntityId) -> impl Future<Output = TenuraResult<MaintenanceRequest>> + Send;
    fn update(
        &self,
        id: EntityId,
        patch: UpdateMaintenanceRequest,
    ) -> impl Future<Output = TenuraResult<MaintenanceRequest>> + Send;
    fn remove(&self, id: EntityId) -> impl Future<Output = TenuraResult<()>> + Send;
    fn list(&self) -> impl Future<Output = TenuraResult<Vec<MaintenanceRequest>>> + Send;
}

pub trait PropertyStore: Send + Sync {
    /// Rejects records where `occupied_units > total_units` with a
    /// `Validation` error.
    fn add(&self, input: CreateProperty) -> impl Future<Output = TenuraResult<Property>> + Send;
    fn get(&self, id: EntityId) -> impl Future<Output = TenuraResult<Property>> + Send;
    /// Shallow-merge `patch`; the merged record must still satisfy the
    /// occupancy invariant.
    fn update(
        &self,
        id: EntityId,
        patch: UpdateProperty,
    ) -> impl Future<Output = TenuraResult<Property>> + Send;
    fn remove(&self, id: EntityId) -> impl Future<Output = TenuraResult<()>> + Send;
    fn list(&self) -> impl Future<Output = TenuraResult<Vec<Property>>> + Send;
}

pub trait TenantStore: Send + Sync {
    fn add(&self, input: CreateTenant) -> impl Future<Output = TenuraResult<Tenant>> + Send;
    fn get(&self, id: EntityId) -> impl Future<Output = TenuraResult<Tenant>> + Send;
    fn update(
        &self,
        id: EntityId,
        patch: UpdateTenant,
    ) -> impl Future<Output = TenuraResult<Tenant>> + Send;
    fn remove(&self, id: EntityId) -> impl Future<Output = TenuraResult<()>> + Send;
    fn list(&self) -> impl Future<Output = TenuraResult<Vec<Tenant>>> + Send;
}

pub trait PaymentStore: Send + Sync {
    fn add(&self, input: CreatePayment) -> impl Future<Output = TenuraResult<Payment>> + Send;
    fn get(&self, id: EntityId) -> impl Future<Output = TenuraResult<Payment>> + Send;
    fn update(
        &self,
        id: EntityId,
        patch: UpdatePayment,
    ) -> impl Future<Output = TenuraResult<Payment>> + Send;
    fn remove(&self, id: EntityId) -> impl Future<Output = TenuraResult<()>> + Send;
    fn list(&self) -> impl Future<Output = TenuraResult<Vec<Payment>>> + Send;
}

pub trait NotificationStore: Send + Sync {
    fn add(
        &self,
        input: CreateNotification,
    ) -> impl Future<Output = TenuraResult<Notification>> + Send;
    fn get(&self, id: EntityId) -> impl Future<Output = TenuraResult<Notification>> + Send;
    /// Flag a single notification as read.
    fn mark_read(&self, id: EntityId) -> impl Future<Output = TenuraResult<Notification>> + Send;
    /// Flag every notification as read; returns how many changed.
    fn mark_all_read(&self) -> impl Future<Output = TenuraResult<usize>> + Send;
    fn remove(&self, id: EntityId) -> impl Future<Output = TenuraResult<()>> + Send;
    fn list(&self) -> impl Future<Output = TenuraResult<Vec<Notification>>> + Send;
}
