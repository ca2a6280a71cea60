use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::middleware::{identify_caller, AppState};
use crate::api::{health, notifications};
use crate::web;

pub fn build_router(state: AppState) -> Router {
    // Notification routes run behind the identity middleware
    let notification_routes = Router::new()
        .route(
            "/api/notifications/employee",
            get(notifications::get_employee_notifications),
        )
        .route(
            "/api/notifications/mark-read",
            post(notifications::mark_as_read),
        )
        .route(
            "/api/notifications/mark-all-read",
            post(notifications::mark_all_as_read),
        )
        .route("/dashboard", get(web::show_dashboard))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            identify_caller,
        ));

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health::health))
        .merge(notification_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Notidesk Employee Notification Service"
}
