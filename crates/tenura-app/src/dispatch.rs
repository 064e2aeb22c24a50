//! Notification dispatch with a real asynchronous contract.
//!
//! The delay stands in for the latency of a delivery backend. Unlike a
//! fire-and-forget timer, a dispatch is a future the caller owns: it can
//! be cancelled through a [`CancelToken`], and store failures propagate
//! instead of disappearing. A cancelled dispatch writes nothing.

use tenura_core::models::notification::{CreateNotification, Notification};
use tenura_core::store::NotificationStore;
use tokio::sync::watch;

use crate::config::DispatchConfig;
use crate::error::DispatchError;

/// Create a linked cancellation pair. Dropping the handle without
/// cancelling leaves the token permanently uncancelled.
pub fn cancellation() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Caller-side switch that cancels every linked token.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Cancellation signal observed by in-flight dispatches.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Resolves when the linked handle cancels; pends forever if the
    /// handle is dropped without cancelling.
    async fn cancelled(mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Sends notifications through the store after a configured delay.
pub struct Dispatcher<N: NotificationStore> {
    store: N,
    config: DispatchConfig,
}

impl<N: NotificationStore> Dispatcher<N> {
    pub fn new(store: N, config: DispatchConfig) -> Self {
        Self { store, config }
    }

    /// Deliver a notification. Cancelling before the delay elapses
    /// returns [`DispatchError::Cancelled`] without touching the store.
    pub async fn send(
        &self,
        input: CreateNotification,
        cancel: &CancelToken,
    ) -> Result<Notification, DispatchError> {
        tokio::select! {
            biased;
            _ = cancel.clone().cancelled() => {
                tracing::debug!(title = %input.title, "notification dispatch cancelled");
                Err(DispatchError::Cancelled)
            }
            _ = tokio::time::sleep(self.config.send_delay) => {
                let notification = self.store.add(input).await?;
                tracing::info!(id = %notification.id, "notification sent");
                Ok(notification)
            }
        }
    }

    /// Re-list the collection after the refresh delay, under the same
    /// cancellation contract.
    pub async fn refresh(
        &self,
        cancel: &CancelToken,
    ) -> Result<Vec<Notification>, DispatchError> {
        tokio::select! {
            biased;
            _ = cancel.clone().cancelled() => Err(DispatchError::Cancelled),
            _ = tokio::time::sleep(self.config.refresh_delay) => {
                Ok(self.store.list().await?)
            }
        }
    }
}
