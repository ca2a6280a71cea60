use notidesk::database::Database;
use notidesk::models::NotificationRecord;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    use uuid::Uuid;
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;

    db
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE notification_records (
            notification_id INTEGER PRIMARY KEY,
            employee_id INTEGER,
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            date_created TEXT NOT NULL,
            is_broadcast INTEGER NOT NULL DEFAULT 0,
            is_read INTEGER NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create notification_records table");

    sqlx::query("CREATE INDEX idx_notification_records_employee ON notification_records(employee_id)")
        .execute(pool)
        .await
        .ok();
}

/// Timestamp for `days_ago` days before now, RFC 3339.
pub fn timestamp_days_ago(days_ago: i64) -> String {
    (OffsetDateTime::now_utc() - Duration::days(days_ago))
        .format(&Rfc3339)
        .unwrap()
}

/// Insert a record with an explicit creation timestamp and read flag.
pub async fn insert_record(
    db: &Database,
    notification_id: i64,
    employee_id: Option<i64>,
    is_broadcast: bool,
    date_created: &str,
    is_read: bool,
) -> NotificationRecord {
    let record = NotificationRecord {
        notification_id,
        employee_id,
        title: format!("Notification {}", notification_id),
        message: format!("Body of notification {}", notification_id),
        date_created: date_created.to_string(),
        is_broadcast,
        is_read,
    };

    db.insert_notification(&record)
        .await
        .expect("Failed to insert notification record");

    record
}
