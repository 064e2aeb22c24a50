//! Tenura App — the application services behind the management views:
//! form binders with dependent-field rules, reference lookup tables,
//! report builders, and notification dispatch.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod forms;
pub mod lookup;
pub mod reports;

pub use config::DispatchConfig;
pub use dispatch::{cancellation, CancelHandle, CancelToken, Dispatcher};
pub use error::{DispatchError, FormError, FormWarning};
pub use forms::{LeaseForm, MaintenanceForm};
pub use lookup::ReferenceData;
