//! Store-specific error types and conversions.

use tenura_core::TenuraError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Occupancy invariant violated: {occupied} occupied of {total} units")]
    Occupancy { occupied: u32, total: u32 },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<StoreError> for TenuraError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => TenuraError::NotFound { entity, id },
            StoreError::Occupancy { .. } => TenuraError::Validation {
                message: err.to_string(),
            },
            StoreError::LockPoisoned => TenuraError::Internal(err.to_string()),
        }
    }
}
