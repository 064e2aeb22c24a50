//! Access-layer error types.

use tenura_core::TenuraError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("not authorized to update settings")]
    NotAuthorized,

    #[error("settings request failed: {0}")]
    Transport(String),

    #[error("failed to update settings")]
    UpdateFailed,
}

impl From<AccessError> for TenuraError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::UnknownRole(_) | AccessError::NotAuthorized => {
                TenuraError::AuthorizationDenied {
                    reason: err.to_string(),
                }
            }
            AccessError::Transport(msg) => TenuraError::Upstream(msg),
            AccessError::UpdateFailed => TenuraError::Upstream(err.to_string()),
        }
    }
}
