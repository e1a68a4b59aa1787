//! Rutas de la API
//!
//! Este módulo arma el router completo: recursos bajo /api, health check
//! y el documento OpenAPI.

pub mod brand_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use utoipa::OpenApi;

use crate::docs::ApiDoc;
use crate::state::AppState;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/docs/openapi.json", get(openapi_document))
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/brand", brand_routes::create_brand_router())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-rental-api",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Documento OpenAPI generado a partir de las anotaciones de los handlers
async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
