//! Integration tests for the navigation capability table.

use tenura_access::navigation::{
    allowed, capabilities, default_route, is_active, menu, support_links,
};
use tenura_access::role::Role;

#[test]
fn tenant_menu_excludes_admin_entries() {
    let labels: Vec<_> = menu(Role::Tenant).iter().map(|e| e.label).collect();

    assert!(labels.contains(&"Dashboard"));
    assert!(labels.contains(&"Maintenance"));
    // No top-level portfolio management for tenants.
    assert!(!labels.contains(&"Leases"));
    assert!(!labels.contains(&"Properties"));
    assert!(!labels.contains(&"Tenants"));

    assert_eq!(default_route(Role::Tenant), "/tenant");
}

#[test]
fn admin_menu_covers_every_management_area() {
    let labels: Vec<_> = menu(Role::Admin).iter().map(|e| e.label).collect();
    for expected in [
        "Dashboard",
        "Properties",
        "Tenants",
        "Leases",
        "Maintenance",
        "Payments",
        "Reports",
        "Notifications",
    ] {
        assert!(labels.contains(&expected), "missing {expected}");
    }
    assert_eq!(default_route(Role::Admin), "/");
}

#[test]
fn support_links_carry_role_specific_insertions() {
    let admin: Vec<_> = support_links(Role::Admin).iter().map(|e| e.label).collect();
    assert_eq!(admin, vec!["Help Center", "Settings", "Logout"]);

    let tenant: Vec<_> = support_links(Role::Tenant).iter().map(|e| e.label).collect();
    assert_eq!(tenant, vec!["Help Center", "Profile", "Logout"]);
}

#[test]
fn menu_order_is_stable() {
    let capabilities = capabilities(Role::Owner);
    let paths: Vec<_> = capabilities.menu.iter().map(|e| e.path).collect();
    assert_eq!(
        paths,
        vec!["/owner", "/owner/properties", "/owner/reports", "/owner/notifications"]
    );
}

#[test]
fn active_detection_uses_prefix_except_dashboard_roots() {
    // Exact matches.
    assert!(is_active("/leases", "/leases"));
    assert!(is_active("/", "/"));

    // Prefix matches for regular entries.
    assert!(is_active("/leases", "/leases/1718000000000"));
    assert!(is_active("/owner/properties", "/owner/properties/2"));

    // Dashboard roots never match by prefix.
    assert!(!is_active("/", "/leases"));
    assert!(!is_active("/tenant", "/tenant/payments"));
    assert!(!is_active("/owner", "/owner/reports"));
}

#[test]
fn allowed_follows_the_capability_table() {
    assert!(allowed(Role::Admin, "/leases"));
    assert!(allowed(Role::Admin, "/settings"));
    assert!(!allowed(Role::Tenant, "/leases"));
    assert!(allowed(Role::Tenant, "/tenant/payments"));
    assert!(!allowed(Role::Owner, "/tenants"));
}
