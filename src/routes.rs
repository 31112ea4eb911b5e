use crate::dispatcher::AlertDispatcher;
use crate::error::ApiError;
use crate::types::{AlertRequest, AlertType, TestAlertRequest};
use axum::{extract::State, response::IntoResponse, Json, Router};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const SERVICE_NAME: &str = "alert-relay";

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<AlertDispatcher>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", axum::routing::get(health_check))
        // Emergency alert fan-out
        .route(
            "/send-emergency-alert",
            axum::routing::post(send_emergency_alert),
        )
        // Single-recipient provider integration check
        .route("/test-alert", axum::routing::post(test_alert))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

async fn send_emergency_alert(
    State(state): State<AppState>,
    Json(req): Json<AlertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.contacts.is_empty() {
        return Err(ApiError::bad_request("Contacts required"));
    }

    let alert_type = req
        .alert_type
        .as_deref()
        .and_then(|t| AlertType::from_str(t).ok())
        .ok_or_else(|| ApiError::bad_request("Invalid type"))?;

    let response = state.dispatcher.dispatch(&req.contacts, alert_type).await?;
    Ok(Json(response))
}

async fn test_alert(
    State(state): State<AppState>,
    Json(req): Json<TestAlertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let test_phone = req
        .test_phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::bad_request("testPhone required"))?;

    let sid = state.dispatcher.send_test(test_phone).await?;
    Ok(Json(json!({
        "success": true,
        "sid": sid
    })))
}
