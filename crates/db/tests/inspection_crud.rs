//! Integration tests for inspection CRUD, assignment, and property history.
//!
//! Exercises the repository layer against a real database:
//! - Create with and without a seeded report document
//! - Partial updates and inspector assignment
//! - Report document replacement
//! - Property history ordering and `has_report_data` flags
//! - Source-inspection FK behaviour on delete

use propcheck_core::types::DbId;
use propcheck_db::models::inspection::{CreateInspection, InspectionListQuery, UpdateInspection};
use propcheck_db::repositories::InspectionRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_inspection(property_id: DbId, inspection_type: &str) -> CreateInspection {
    CreateInspection {
        property_id,
        inspection_type: inspection_type.to_string(),
        inspector_id: None,
        typist_id: None,
        template_id: None,
        source_inspection_id: None,
        include_photos: None,
        tenant_email: None,
        client_email_override: None,
        conduct_date: None,
        conduct_time_preference: None,
        scheduled_date: None,
        key_location: None,
        key_return: None,
        internal_notes: None,
        notes: None,
    }
}

fn no_filters() -> InspectionListQuery {
    InspectionListQuery {
        property_id: None,
        status: None,
        limit: None,
        offset: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Create and fetch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let input = CreateInspection {
        tenant_email: Some("tenant@example.com".to_string()),
        key_location: Some("Lockbox 4".to_string()),
        ..new_inspection(77, "check_in")
    };

    let created = InspectionRepo::create(&pool, &input, "created", None, None, None)
        .await
        .unwrap();
    assert_eq!(created.property_id, 77);
    assert_eq!(created.inspection_type, "check_in");
    assert_eq!(created.status, "created");
    assert_eq!(created.tenant_email.as_deref(), Some("tenant@example.com"));
    assert_eq!(created.key_location.as_deref(), Some("Lockbox 4"));
    assert!(created.report_data.is_none());

    let found = InspectionRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created inspection should be found");
    assert_eq!(found.id, created.id);
    assert_eq!(found.status, "created");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_stores_seeded_document(pool: PgPool) {
    let source = InspectionRepo::create(&pool, &new_inspection(5, "check_in"), "complete", None, None, None)
        .await
        .unwrap();

    let seeded = serde_json::json!({
        "Kitchen": {
            "Sink": {"description": "Stainless steel", "condition": "Good"}
        }
    });
    let created = InspectionRepo::create(
        &pool,
        &new_inspection(5, "check_out"),
        "created",
        None,
        Some(source.id),
        Some(&seeded),
    )
    .await
    .unwrap();

    assert_eq!(created.source_inspection_id, Some(source.id));
    assert_eq!(created.report_data, Some(seeded.clone()));

    let found = InspectionRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.report_data, Some(seeded));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    assert!(InspectionRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: Updates preserve unrelated fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update(pool: PgPool) {
    let input = CreateInspection {
        notes: Some("before".to_string()),
        ..new_inspection(8, "inventory")
    };
    let created = InspectionRepo::create(&pool, &input, "created", None, None, None)
        .await
        .unwrap();

    let updated = InspectionRepo::update(
        &pool,
        created.id,
        &UpdateInspection {
            inspection_type: None,
            status: Some("active".to_string()),
            typist_id: Some(12),
            template_id: None,
            tenant_email: None,
            client_email_override: None,
            conduct_date: None,
            conduct_time_preference: None,
            scheduled_date: None,
            key_location: None,
            key_return: None,
            internal_notes: None,
            notes: None,
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.status, "active");
    assert_eq!(updated.typist_id, Some(12));
    assert_eq!(updated.notes.as_deref(), Some("before"));
    assert_eq!(updated.inspection_type, "inventory");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = InspectionRepo::update(
        &pool,
        999_999,
        &UpdateInspection {
            inspection_type: None,
            status: Some("active".to_string()),
            typist_id: None,
            template_id: None,
            tenant_email: None,
            client_email_override: None,
            conduct_date: None,
            conduct_time_preference: None,
            scheduled_date: None,
            key_location: None,
            key_return: None,
            internal_notes: None,
            notes: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: Inspector assignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_inspector_assigns_and_clears(pool: PgPool) {
    let created = InspectionRepo::create(&pool, &new_inspection(3, "check_in"), "created", None, None, None)
        .await
        .unwrap();
    assert!(created.inspector_id.is_none());

    let assigned = InspectionRepo::set_inspector(&pool, created.id, Some(41), "assigned")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(assigned.inspector_id, Some(41));
    assert_eq!(assigned.status, "assigned");

    // Clearing writes NULL rather than keeping the old value.
    let cleared = InspectionRepo::set_inspector(&pool, created.id, None, "created")
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.inspector_id.is_none());
    assert_eq!(cleared.status, "created");
}

// ---------------------------------------------------------------------------
// Test: Report replacement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_report_data(pool: PgPool) {
    let created = InspectionRepo::create(&pool, &new_inspection(9, "check_out"), "active", None, None, None)
        .await
        .unwrap();
    assert!(created.report_data.is_none());

    let doc = serde_json::json!({"Hallway": {"Walls": {"condition": "Fair"}}});
    let updated = InspectionRepo::replace_report_data(&pool, created.id, &doc)
        .await
        .unwrap()
        .expect("replace should return the row");
    assert_eq!(updated.report_data, Some(doc));

    assert!(
        InspectionRepo::replace_report_data(&pool, 999_999, &serde_json::json!({}))
            .await
            .unwrap()
            .is_none()
    );
}

// ---------------------------------------------------------------------------
// Test: Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters(pool: PgPool) {
    InspectionRepo::create(&pool, &new_inspection(1, "check_in"), "created", None, None, None)
        .await
        .unwrap();
    InspectionRepo::create(&pool, &new_inspection(1, "check_out"), "active", None, None, None)
        .await
        .unwrap();
    InspectionRepo::create(&pool, &new_inspection(2, "inventory"), "created", None, None, None)
        .await
        .unwrap();

    let all = InspectionRepo::list(&pool, &no_filters()).await.unwrap();
    assert_eq!(all.len(), 3);

    let for_property = InspectionRepo::list(
        &pool,
        &InspectionListQuery {
            property_id: Some(1),
            ..no_filters()
        },
    )
    .await
    .unwrap();
    assert_eq!(for_property.len(), 2);
    assert!(for_property.iter().all(|i| i.property_id == 1));

    let active = InspectionRepo::list(
        &pool,
        &InspectionListQuery {
            status: Some("active".to_string()),
            ..no_filters()
        },
    )
    .await
    .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].inspection_type, "check_out");

    let paged = InspectionRepo::list(
        &pool,
        &InspectionListQuery {
            limit: Some(2),
            offset: Some(2),
            ..no_filters()
        },
    )
    .await
    .unwrap();
    assert_eq!(paged.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Property history
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_ordering_and_flags(pool: PgPool) {
    let doc = serde_json::json!({"Kitchen": {}});
    let first = InspectionRepo::create(&pool, &new_inspection(42, "inventory"), "complete", None, None, Some(&doc))
        .await
        .unwrap();
    let second = InspectionRepo::create(&pool, &new_inspection(42, "check_in"), "created", None, None, None)
        .await
        .unwrap();
    // Different property, must not appear.
    InspectionRepo::create(&pool, &new_inspection(43, "check_in"), "created", None, None, None)
        .await
        .unwrap();

    let history = InspectionRepo::history_for_property(&pool, 42).await.unwrap();
    assert_eq!(history.len(), 2);
    // Newest first; id breaks the tie for same-instant inserts.
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);
    assert!(!history[0].has_report_data);
    assert!(history[1].has_report_data);
    assert_eq!(history[1].status, "complete");

    let empty = InspectionRepo::history_for_property(&pool, 99).await.unwrap();
    assert!(empty.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Delete and source FK behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: PgPool) {
    let created = InspectionRepo::create(&pool, &new_inspection(6, "check_in"), "created", None, None, None)
        .await
        .unwrap();

    assert!(InspectionRepo::delete(&pool, created.id).await.unwrap());
    assert!(InspectionRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!InspectionRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_source_nulls_the_reference(pool: PgPool) {
    let source = InspectionRepo::create(&pool, &new_inspection(7, "check_in"), "complete", None, None, None)
        .await
        .unwrap();
    let seeded = InspectionRepo::create(
        &pool,
        &new_inspection(7, "check_out"),
        "created",
        None,
        Some(source.id),
        None,
    )
    .await
    .unwrap();
    assert_eq!(seeded.source_inspection_id, Some(source.id));

    assert!(InspectionRepo::delete(&pool, source.id).await.unwrap());

    let orphan = InspectionRepo::find_by_id(&pool, seeded.id).await.unwrap().unwrap();
    assert!(orphan.source_inspection_id.is_none());
}
