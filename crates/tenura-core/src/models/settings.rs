//! Application settings — the payload of the settings update call.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    pub company_name: String,
    pub contact_email: String,
    /// ISO 4217 currency code used for display.
    pub currency: String,
    pub notify_by_email: bool,
    pub notify_by_sms: bool,
    /// Auto-assign new maintenance requests to the default contractor.
    pub maintenance_auto_assign: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_email: String::new(),
            currency: "USD".into(),
            notify_by_email: true,
            notify_by_sms: false,
            maintenance_auto_assign: false,
        }
    }
}
