use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::services::NotificationService;

#[derive(Clone)]
pub struct AppState {
    pub notification_service: NotificationService,
    pub default_employee_id: i64,
}

/// The employee on whose behalf an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub employee_id: i64,
}

/// Resolve the caller identity and store it in request extensions.
///
/// This middleware is the identity collaborator: it trusts the
/// `X-Employee-Id` header when present (an upstream auth proxy would set
/// it) and otherwise falls back to the configured default identity. The
/// identifier is not validated against an employee directory.
pub async fn identify_caller(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let employee_id = request
        .headers()
        .get("x-employee-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(state.default_employee_id);

    request
        .extensions_mut()
        .insert(CallerIdentity { employee_id });

    next.run(request).await
}
