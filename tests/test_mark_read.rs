mod helpers;

use std::sync::Arc;

use helpers::test_db::{insert_record, setup_test_db, timestamp_days_ago};
use notidesk::services::NotificationService;

#[tokio::test]
async fn test_mark_as_read_sets_flag() {
    let db = setup_test_db().await;
    let service = NotificationService::new(Arc::new(db.clone()));

    insert_record(&db, 1, Some(5), false, &timestamp_days_ago(0), false).await;

    service.mark_as_read(1).await.unwrap();

    let feed = service.fetch_visible_notifications(5).await.unwrap();
    assert!(feed.today[0].is_read);
    assert_eq!(feed.unread_count, 0);
}

#[tokio::test]
async fn test_mark_as_read_is_idempotent() {
    let db = setup_test_db().await;
    let service = NotificationService::new(Arc::new(db.clone()));

    insert_record(&db, 1, Some(5), false, &timestamp_days_ago(0), false).await;

    service.mark_as_read(1).await.unwrap();
    service.mark_as_read(1).await.unwrap();

    let feed = service.fetch_visible_notifications(5).await.unwrap();
    assert!(feed.today[0].is_read);
    assert_eq!(feed.unread_count, 0);
}

#[tokio::test]
async fn test_mark_as_read_unknown_id_is_noop_success() {
    let db = setup_test_db().await;
    let service = NotificationService::new(Arc::new(db.clone()));

    insert_record(&db, 1, Some(5), false, &timestamp_days_ago(0), false).await;

    // No record with id 999: still success, nothing changes
    service.mark_as_read(999).await.unwrap();

    let feed = service.fetch_visible_notifications(5).await.unwrap();
    assert_eq!(feed.unread_count, 1);
}

#[tokio::test]
async fn test_mark_all_as_read_clears_visible_unread() {
    let db = setup_test_db().await;
    let service = NotificationService::new(Arc::new(db.clone()));

    insert_record(&db, 1, Some(5), false, &timestamp_days_ago(0), false).await;
    insert_record(&db, 2, None, true, &timestamp_days_ago(1), false).await;
    insert_record(&db, 3, Some(5), false, &timestamp_days_ago(3), true).await;

    service.mark_all_as_read(5).await.unwrap();

    let feed = service.fetch_visible_notifications(5).await.unwrap();
    assert_eq!(feed.unread_count, 0);
    assert!(feed
        .today
        .iter()
        .chain(feed.earlier.iter())
        .all(|n| n.is_read));
}

#[tokio::test]
async fn test_mark_all_as_read_ignores_other_employees_records() {
    let db = setup_test_db().await;
    let service = NotificationService::new(Arc::new(db.clone()));

    insert_record(&db, 1, Some(5), false, &timestamp_days_ago(0), false).await;
    insert_record(&db, 2, Some(9), false, &timestamp_days_ago(0), false).await;

    service.mark_all_as_read(5).await.unwrap();

    // Employee 9's personal record stays unread
    let other_feed = service.fetch_visible_notifications(9).await.unwrap();
    assert_eq!(other_feed.unread_count, 1);
}

#[tokio::test]
async fn test_mark_all_as_read_is_idempotent() {
    let db = setup_test_db().await;
    let service = NotificationService::new(Arc::new(db.clone()));

    insert_record(&db, 1, Some(5), false, &timestamp_days_ago(0), false).await;
    insert_record(&db, 2, None, true, &timestamp_days_ago(2), false).await;

    service.mark_all_as_read(5).await.unwrap();
    service.mark_all_as_read(5).await.unwrap();

    let feed = service.fetch_visible_notifications(5).await.unwrap();
    assert_eq!(feed.unread_count, 0);
    assert_eq!(feed.total_count, 2);
}

#[tokio::test]
async fn test_mark_all_then_reference_scenario_unread_count() {
    // After MarkAllAsRead(5) on the reference data, unreadCount drops to 0
    let db = setup_test_db().await;
    let service = NotificationService::new(Arc::new(db.clone()));

    insert_record(&db, 1, Some(5), false, &timestamp_days_ago(0), false).await;
    insert_record(&db, 2, Some(9), true, &timestamp_days_ago(1), false).await;

    service.mark_all_as_read(5).await.unwrap();

    let feed = service.fetch_visible_notifications(5).await.unwrap();
    assert_eq!(feed.unread_count, 0);
    assert_eq!(feed.total_count, 2);
}
