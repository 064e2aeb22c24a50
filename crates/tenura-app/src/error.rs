//! Application-layer error and warning types.

use tenura_core::TenuraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] TenuraError),
}

impl From<FormError> for TenuraError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::MissingField(_) => TenuraError::Validation {
                message: err.to_string(),
            },
            FormError::Store(inner) => inner,
        }
    }
}

/// Non-fatal outcome of a dependent-field rule whose lookup missed.
///
/// The draft fields stay untouched; the warning surfaces the miss so the
/// caller can flag it instead of silently carrying stale values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormWarning {
    #[error("tenant not on record: {0}")]
    UnknownTenant(String),

    #[error("property not on record: {0}")]
    UnknownProperty(String),

    #[error("no tenant on record for unit: {0}")]
    UnassignedUnit(String),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch cancelled")]
    Cancelled,

    #[error(transparent)]
    Store(#[from] TenuraError),
}

impl From<DispatchError> for TenuraError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Cancelled => TenuraError::Internal(err.to_string()),
            DispatchError::Store(inner) => inner,
        }
    }
}
