//! Integration tests for the property store's occupancy invariant.

use tenura_core::models::property::{CreateProperty, PropertyStatus, UpdateProperty};
use tenura_core::store::PropertyStore;
use tenura_core::TenuraError;
use tenura_store::InMemoryPropertyStore;

fn create_property(occupied: u32, total: u32) -> CreateProperty {
    CreateProperty {
        name: "Sunset Apartments".into(),
        address: "123 Sunset Blvd".into(),
        description: String::new(),
        property_type: "apartment".into(),
        total_units: total,
        occupied_units: occupied,
        status: PropertyStatus::Active,
        rent_amount: 1200,
        amenities: vec![],
    }
}

#[tokio::test]
async fn add_accepts_full_occupancy() {
    let store = InMemoryPropertyStore::new();
    let property = store.add(create_property(12, 12)).await.unwrap();
    assert_eq!(property.occupied_units, 12);
}

#[tokio::test]
async fn add_rejects_overfull_property() {
    let store = InMemoryPropertyStore::new();
    let err = store.add(create_property(13, 12)).await.unwrap_err();
    assert!(matches!(err, TenuraError::Validation { .. }));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_rejects_merge_that_breaks_invariant() {
    let store = InMemoryPropertyStore::new();
    let property = store.add(create_property(10, 12)).await.unwrap();

    // Shrinking capacity below the current occupancy must fail.
    let err = store
        .update(
            property.id,
            UpdateProperty {
                total_units: Some(8),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TenuraError::Validation { .. }));

    // Rejected patch leaves the stored record untouched.
    let stored = store.get(property.id).await.unwrap();
    assert_eq!(stored.total_units, 12);
    assert_eq!(stored.occupied_units, 10);
}

#[tokio::test]
async fn update_accepts_consistent_patch() {
    let store = InMemoryPropertyStore::new();
    let property = store.add(create_property(10, 12)).await.unwrap();

    let updated = store
        .update(
            property.id,
            UpdateProperty {
                occupied_units: Some(12),
                status: Some(PropertyStatus::Active),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.occupied_units, 12);
}
