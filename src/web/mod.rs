use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};

use crate::api::middleware::{AppState, CallerIdentity};
use crate::models::NotificationRecord;

// Template structs
#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    employee_id: i64,
    unread_count: usize,
    total_count: usize,
    today: Vec<NotificationCard>,
    earlier: Vec<NotificationCard>,
}

struct NotificationCard {
    notification_id: i64,
    title: String,
    message: String,
    date_created: String,
    is_broadcast: bool,
    is_read: bool,
}

impl From<NotificationRecord> for NotificationCard {
    fn from(record: NotificationRecord) -> Self {
        Self {
            notification_id: record.notification_id,
            title: record.title,
            message: record.message,
            date_created: record.date_created,
            is_broadcast: record.is_broadcast,
            is_read: record.is_read,
        }
    }
}

// Handlers
pub async fn show_dashboard(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> impl IntoResponse {
    let feed = match state
        .notification_service
        .fetch_visible_notifications(caller.employee_id)
        .await
    {
        Ok(feed) => feed,
        Err(_) => {
            return Html("<div class=\"alert alert-error\">Failed to load notifications</div>")
                .into_response();
        }
    };

    let template = DashboardTemplate {
        employee_id: caller.employee_id,
        unread_count: feed.unread_count,
        total_count: feed.total_count,
        today: feed.today.into_iter().map(NotificationCard::from).collect(),
        earlier: feed
            .earlier
            .into_iter()
            .map(NotificationCard::from)
            .collect(),
    };

    HtmlTemplate(template).into_response()
}

struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}
