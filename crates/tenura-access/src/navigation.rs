//! Role-conditioned navigation.
//!
//! A data-driven capability table: each role maps to its ordered main
//! menu, its support links, and its default landing route. Adding a role
//! means adding a table row, not another branch.

use crate::role::Role;

/// One navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Everything the chrome needs to render for one role.
#[derive(Debug, Clone, Copy)]
pub struct RoleCapabilities {
    pub role: Role,
    pub menu: &'static [NavEntry],
    pub support: &'static [NavEntry],
    pub default_route: &'static str,
}

const ADMIN_MENU: &[NavEntry] = &[
    NavEntry { label: "Dashboard", path: "/", icon: "layout-dashboard" },
    NavEntry { label: "Properties", path: "/properties", icon: "building" },
    NavEntry { label: "Tenants", path: "/tenants", icon: "users" },
    NavEntry { label: "Leases", path: "/leases", icon: "file-text" },
    NavEntry { label: "Maintenance", path: "/maintenance", icon: "wrench" },
    NavEntry { label: "Payments", path: "/payments", icon: "credit-card" },
    NavEntry { label: "Reports", path: "/reports", icon: "bar-chart" },
    NavEntry { label: "Notifications", path: "/notifications", icon: "bell" },
];

const ADMIN_SUPPORT: &[NavEntry] = &[
    NavEntry { label: "Help Center", path: "/help", icon: "life-buoy" },
    NavEntry { label: "Settings", path: "/settings", icon: "settings" },
    NavEntry { label: "Logout", path: "/logout", icon: "log-out" },
];

const TENANT_MENU: &[NavEntry] = &[
    NavEntry { label: "Dashboard", path: "/tenant", icon: "layout-dashboard" },
    NavEntry { label: "My Lease", path: "/tenant/lease", icon: "file-text" },
    NavEntry { label: "Maintenance", path: "/tenant/maintenance", icon: "wrench" },
    NavEntry { label: "Payments", path: "/tenant/payments", icon: "credit-card" },
    NavEntry { label: "Notifications", path: "/tenant/notifications", icon: "bell" },
];

const TENANT_SUPPORT: &[NavEntry] = &[
    NavEntry { label: "Help Center", path: "/help", icon: "life-buoy" },
    NavEntry { label: "Profile", path: "/tenant/profile", icon: "user" },
    NavEntry { label: "Logout", path: "/logout", icon: "log-out" },
];

const OWNER_MENU: &[NavEntry] = &[
    NavEntry { label: "Dashboard", path: "/owner", icon: "layout-dashboard" },
    NavEntry { label: "My Properties", path: "/owner/properties", icon: "building" },
    NavEntry { label: "Reports", path: "/owner/reports", icon: "bar-chart" },
    NavEntry { label: "Notifications", path: "/owner/notifications", icon: "bell" },
];

const OWNER_SUPPORT: &[NavEntry] = &[
    NavEntry { label: "Help Center", path: "/help", icon: "life-buoy" },
    NavEntry { label: "Profile", path: "/owner/profile", icon: "user" },
    NavEntry { label: "Logout", path: "/logout", icon: "log-out" },
];

static ADMIN: RoleCapabilities = RoleCapabilities {
    role: Role::Admin,
    menu: ADMIN_MENU,
    support: ADMIN_SUPPORT,
    default_route: "/",
};

static TENANT: RoleCapabilities = RoleCapabilities {
    role: Role::Tenant,
    menu: TENANT_MENU,
    support: TENANT_SUPPORT,
    default_route: "/tenant",
};

static OWNER: RoleCapabilities = RoleCapabilities {
    role: Role::Owner,
    menu: OWNER_MENU,
    support: OWNER_SUPPORT,
    default_route: "/owner",
};

/// Dashboard roots match only exactly, so "/" (or "/tenant") does not
/// light up on every nested page.
const DASHBOARD_ROOTS: &[&str] = &["/", "/tenant", "/owner"];

/// The capability row for a role.
pub fn capabilities(role: Role) -> &'static RoleCapabilities {
    match role {
        Role::Admin => &ADMIN,
        Role::Tenant => &TENANT,
        Role::Owner => &OWNER,
    }
}

pub fn menu(role: Role) -> &'static [NavEntry] {
    capabilities(role).menu
}

pub fn support_links(role: Role) -> &'static [NavEntry] {
    capabilities(role).support
}

pub fn default_route(role: Role) -> &'static str {
    capabilities(role).default_route
}

/// Whether a menu entry is the active one for the current location:
/// an exact match, or a prefix match for non-dashboard entries.
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    if current_path == entry_path {
        return true;
    }
    if DASHBOARD_ROOTS.contains(&entry_path) {
        return false;
    }
    current_path.starts_with(entry_path)
}

/// Whether a role's navigation reaches the given path at all.
pub fn allowed(role: Role, path: &str) -> bool {
    let caps = capabilities(role);
    caps.menu
        .iter()
        .chain(caps.support.iter())
        .any(|entry| is_active(entry.path, path))
}
