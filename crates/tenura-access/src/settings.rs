//! Settings update service.
//!
//! The one outbound call in the system. The role gate reads the locally
//! stored role and rejects non-admins before any request goes out. It is
//! a UX affordance, not a security boundary — the receiving end must
//! enforce the role itself.

use std::future::Future;
use std::sync::RwLock;

use tenura_core::models::settings::AppSettings;
use tracing::{info, warn};

use crate::config::AccessConfig;
use crate::error::AccessError;
use crate::role::Role;

/// Source of the locally stored role value.
pub trait RoleSource: Send + Sync {
    fn current_role(&self) -> Option<Role>;
}

/// In-memory role storage, the stand-in for per-browser storage.
#[derive(Debug, Default)]
pub struct StoredRole {
    role: RwLock<Option<Role>>,
}

impl StoredRole {
    pub fn new(role: Option<Role>) -> Self {
        Self {
            role: RwLock::new(role),
        }
    }

    pub fn set(&self, role: Role) {
        if let Ok(mut stored) = self.role.write() {
            *stored = Some(role);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut stored) = self.role.write() {
            *stored = None;
        }
    }
}

impl RoleSource for StoredRole {
    fn current_role(&self) -> Option<Role> {
        self.role.read().ok().and_then(|stored| *stored)
    }
}

/// Transport seam for the settings update.
pub trait SettingsClient: Send + Sync {
    fn put_settings(
        &self,
        settings: &AppSettings,
    ) -> impl Future<Output = Result<(), AccessError>> + Send;
}

/// `reqwest`-backed client issuing the `PUT` with a JSON body.
pub struct HttpSettingsClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpSettingsClient {
    pub fn new(config: &AccessConfig) -> Result<Self, AccessError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AccessError::Transport(e.to_string()))?;
        Ok(Self {
            endpoint: config.settings_endpoint.clone(),
            http,
        })
    }
}

impl SettingsClient for HttpSettingsClient {
    async fn put_settings(&self, settings: &AppSettings) -> Result<(), AccessError> {
        let response = self
            .http
            .put(&self.endpoint)
            .json(settings)
            .send()
            .await
            .map_err(|e| AccessError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "settings update rejected");
            return Err(AccessError::UpdateFailed);
        }
        Ok(())
    }
}

/// Role-gated settings updates.
pub struct SettingsService<R: RoleSource, C: SettingsClient> {
    roles: R,
    client: C,
}

impl<R: RoleSource, C: SettingsClient> SettingsService<R, C> {
    pub fn new(roles: R, client: C) -> Self {
        Self { roles, client }
    }

    /// Push new settings. Fails with [`AccessError::NotAuthorized`]
    /// before any request is attempted unless the stored role is admin.
    pub async fn update_settings(&self, settings: &AppSettings) -> Result<(), AccessError> {
        match self.roles.current_role() {
            Some(Role::Admin) => {}
            _ => return Err(AccessError::NotAuthorized),
        }

        self.client.put_settings(settings).await?;
        info!(company = %settings.company_name, "settings updated");
        Ok(())
    }
}
