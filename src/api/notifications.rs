use axum::{extract::State, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::middleware::{ApiResult, AppState, CallerIdentity},
    models::NotificationRecord,
    services::NotificationFeed,
};

// Request DTOs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub notification_id: i64,
}

// Response DTOs
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification_id: i64,
    pub employee_id: Option<i64>,
    pub title: String,
    pub message: String,
    pub date_created: String,
    pub is_broadcast: bool,
    pub is_read: bool,
}

impl From<NotificationRecord> for NotificationResponse {
    fn from(record: NotificationRecord) -> Self {
        Self {
            notification_id: record.notification_id,
            employee_id: record.employee_id,
            title: record.title,
            message: record.message,
            date_created: record.date_created,
            is_broadcast: record.is_broadcast,
            is_read: record.is_read,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategorizedNotifications {
    pub today: Vec<NotificationResponse>,
    pub earlier: Vec<NotificationResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    pub notifications: CategorizedNotifications,
    pub total_count: usize,
    pub unread_count: usize,
}

impl From<NotificationFeed> for NotificationData {
    fn from(feed: NotificationFeed) -> Self {
        Self {
            notifications: CategorizedNotifications {
                today: feed.today.into_iter().map(NotificationResponse::from).collect(),
                earlier: feed
                    .earlier
                    .into_iter()
                    .map(NotificationResponse::from)
                    .collect(),
            },
            total_count: feed.total_count,
            unread_count: feed.unread_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub success: bool,
    pub message: String,
    pub data: NotificationData,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

// API Handlers

/// Fetch the caller's notifications, bucketed into today and earlier
pub async fn get_employee_notifications(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<impl IntoResponse> {
    let feed = state
        .notification_service
        .fetch_visible_notifications(caller.employee_id)
        .await?;

    Ok(Json(DataResponse {
        success: true,
        message: "Notifications fetched successfully".to_string(),
        data: feed.into(),
    }))
}

/// Mark one notification as read
pub async fn mark_as_read(
    State(state): State<AppState>,
    Json(request): Json<MarkReadRequest>,
) -> ApiResult<impl IntoResponse> {
    state
        .notification_service
        .mark_as_read(request.notification_id)
        .await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: "Notification marked as read".to_string(),
    }))
}

/// Mark all of the caller's notifications as read
pub async fn mark_all_as_read(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<impl IntoResponse> {
    state
        .notification_service
        .mark_all_as_read(caller.employee_id)
        .await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: "All notifications marked as read".to_string(),
    }))
}
