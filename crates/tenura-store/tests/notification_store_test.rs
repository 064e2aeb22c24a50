//! Integration tests for the notification store's read-state handling.

use tenura_core::models::notification::{CreateNotification, NotificationKind};
use tenura_core::store::NotificationStore;
use tenura_store::InMemoryNotificationStore;

fn create_notification(title: &str) -> CreateNotification {
    CreateNotification {
        title: title.into(),
        message: "details".into(),
        kind: NotificationKind::Info,
    }
}

#[tokio::test]
async fn new_notifications_start_unread() {
    let store = InMemoryNotificationStore::new();
    let notification = store.add(create_notification("Rent received")).await.unwrap();
    assert!(!notification.read);
}

#[tokio::test]
async fn mark_read_flags_a_single_record() {
    let store = InMemoryNotificationStore::new();
    let first = store.add(create_notification("Rent received")).await.unwrap();
    let second = store.add(create_notification("Lease expiring")).await.unwrap();

    let marked = store.mark_read(first.id).await.unwrap();
    assert!(marked.read);

    let all = store.list().await.unwrap();
    assert!(all.iter().find(|n| n.id == first.id).unwrap().read);
    assert!(!all.iter().find(|n| n.id == second.id).unwrap().read);
}

#[tokio::test]
async fn mark_all_read_reports_changed_count() {
    let store = InMemoryNotificationStore::new();
    let first = store.add(create_notification("a")).await.unwrap();
    store.add(create_notification("b")).await.unwrap();
    store.add(create_notification("c")).await.unwrap();

    store.mark_read(first.id).await.unwrap();

    // Only the two still-unread records count as changed.
    assert_eq!(store.mark_all_read().await.unwrap(), 2);
    assert!(store.list().await.unwrap().iter().all(|n| n.read));

    // A second pass changes nothing.
    assert_eq!(store.mark_all_read().await.unwrap(), 0);
}
