use sqlx::Row;

use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::NotificationRecord;

impl Database {
    /// Fetch every record visible to the given employee, newest first.
    ///
    /// Visibility is owned-or-broadcast; tie order within a timestamp is
    /// whatever the storage returns.
    pub async fn list_visible_notifications(
        &self,
        employee_id: i64,
    ) -> ApiResult<Vec<NotificationRecord>> {
        let rows = sqlx::query(
            "SELECT notification_id, employee_id, title, message, date_created, is_broadcast, is_read
             FROM notification_records
             WHERE employee_id = ? OR is_broadcast = 1
             ORDER BY date_created DESC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        let mut notifications = Vec::new();
        for row in rows {
            let is_broadcast_int: i32 = row.try_get("is_broadcast")?;
            let is_read_int: i32 = row.try_get("is_read")?;

            notifications.push(NotificationRecord {
                notification_id: row.try_get("notification_id")?,
                employee_id: row.try_get::<i64, _>("employee_id").ok(),
                title: row.try_get("title")?,
                message: row.try_get("message")?,
                date_created: row.try_get("date_created")?,
                is_broadcast: is_broadcast_int != 0,
                is_read: is_read_int != 0,
            });
        }

        Ok(notifications)
    }

    /// Set `is_read` on one record, unconditionally.
    ///
    /// Zero rows affected (unknown id, or already read) is success.
    pub async fn mark_notification_as_read(&self, notification_id: i64) -> ApiResult<u64> {
        let result = sqlx::query(
            "UPDATE notification_records
             SET is_read = 1
             WHERE notification_id = ?",
        )
        .bind(notification_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Set `is_read` on every unread record visible to the employee.
    pub async fn mark_all_notifications_as_read(&self, employee_id: i64) -> ApiResult<u64> {
        let result = sqlx::query(
            "UPDATE notification_records
             SET is_read = 1
             WHERE (employee_id = ? OR is_broadcast = 1) AND is_read = 0",
        )
        .bind(employee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Insert a record. Production rows come from an external producer;
    /// this exists for seeding and tests.
    pub async fn insert_notification(&self, record: &NotificationRecord) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO notification_records (notification_id, employee_id, title, message, date_created, is_broadcast, is_read)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.notification_id)
        .bind(record.employee_id)
        .bind(&record.title)
        .bind(&record.message)
        .bind(&record.date_created)
        .bind(if record.is_broadcast { 1 } else { 0 })
        .bind(if record.is_read { 1 } else { 0 })
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
