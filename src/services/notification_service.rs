use std::sync::Arc;

use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

use crate::api::middleware::error::ApiResult;
use crate::database::Database;
use crate::models::NotificationRecord;

/// The bucketed result of fetching an employee's visible notifications.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    pub today: Vec<NotificationRecord>,
    pub earlier: Vec<NotificationRecord>,
    pub total_count: usize,
    pub unread_count: usize,
}

#[derive(Clone)]
pub struct NotificationService {
    db: Arc<Database>,
}

impl NotificationService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Fetch every record visible to the caller (owned or broadcast),
    /// bucketed into today/earlier with total and unread counts.
    pub async fn fetch_visible_notifications(
        &self,
        employee_id: i64,
    ) -> ApiResult<NotificationFeed> {
        let notifications = self.db.list_visible_notifications(employee_id).await?;

        tracing::debug!(
            "Fetched {} notifications for employee {}",
            notifications.len(),
            employee_id
        );

        let total_count = notifications.len();
        let unread_count = notifications.iter().filter(|n| !n.is_read).count();
        let (today, earlier) = categorize(notifications, OffsetDateTime::now_utc().date());

        Ok(NotificationFeed {
            today,
            earlier,
            total_count,
            unread_count,
        })
    }

    /// Mark one record read. No ownership check: any caller may mark any
    /// id, and an unknown or already-read id is a no-op success.
    pub async fn mark_as_read(&self, notification_id: i64) -> ApiResult<()> {
        let affected = self.db.mark_notification_as_read(notification_id).await?;

        tracing::debug!(
            "Marked notification {} as read ({} row(s) affected)",
            notification_id,
            affected
        );

        Ok(())
    }

    /// Mark every unread record visible to the caller as read. Idempotent.
    pub async fn mark_all_as_read(&self, employee_id: i64) -> ApiResult<()> {
        let affected = self.db.mark_all_notifications_as_read(employee_id).await?;

        tracing::debug!(
            "Marked all notifications read for employee {} ({} row(s) affected)",
            employee_id,
            affected
        );

        Ok(())
    }
}

/// Partition records by calendar date: rows created on `current_date` go to
/// `today`, everything else (past or future) to `earlier`. Input order is
/// preserved within each bucket.
fn categorize(
    notifications: Vec<NotificationRecord>,
    current_date: Date,
) -> (Vec<NotificationRecord>, Vec<NotificationRecord>) {
    let mut today = Vec::new();
    let mut earlier = Vec::new();

    for notification in notifications {
        match creation_date(&notification) {
            Some(date) if date == current_date => today.push(notification),
            // Unparsable timestamps are by definition not today
            _ => earlier.push(notification),
        }
    }

    (today, earlier)
}

fn creation_date(notification: &NotificationRecord) -> Option<Date> {
    OffsetDateTime::parse(&notification.date_created, &Rfc3339)
        .ok()
        .map(|dt| dt.date())
}
