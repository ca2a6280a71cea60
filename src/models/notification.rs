use serde::{Deserialize, Serialize};

/// A single notification row, personal or broadcast.
///
/// `employee_id` is the owning employee and carries no meaning when
/// `is_broadcast` is set. `date_created` is an RFC 3339 timestamp and is
/// immutable after creation, as is `notification_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub notification_id: i64,
    pub employee_id: Option<i64>,
    pub title: String,
    pub message: String,
    pub date_created: String,
    pub is_broadcast: bool,
    pub is_read: bool,
}

impl NotificationRecord {
    /// Build an unread record stamped with the current UTC time.
    ///
    /// Records are created by an external producer in production; this
    /// constructor exists for seeding and tests.
    pub fn new(
        notification_id: i64,
        employee_id: Option<i64>,
        title: String,
        message: String,
        is_broadcast: bool,
    ) -> Self {
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();

        Self {
            notification_id,
            employee_id,
            title,
            message,
            date_created: now,
            is_broadcast,
            is_read: false,
        }
    }

    /// Whether this record is visible to the given caller identity.
    pub fn is_visible_to(&self, employee_id: i64) -> bool {
        self.is_broadcast || self.employee_id == Some(employee_id)
    }
}
