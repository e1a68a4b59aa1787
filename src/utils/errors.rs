//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP con el contrato JSON de la API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::utils::validation::collect_error_messages;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Todos los fallos terminan aquí: cada variante se traduce al status y al
// cuerpo `{status: ...}` que el cliente espera. Nada se propaga sin manejar.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(e) => {
                error!("Error de base de datos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "status": "Internal server error" })),
                )
                    .into_response()
            }

            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "Invalid form data",
                    "errors": collect_error_messages(&e),
                })),
            )
                .into_response(),

            // Un choque de unicidad se reporta como fallo de validación:
            // mismo formato de lista de errores, mismo status 400.
            AppError::ConstraintViolation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "Invalid form data",
                    "errors": [msg],
                })),
            )
                .into_response(),

            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "status": msg }))).into_response()
            }

            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "status": msg }))).into_response()
            }

            AppError::Internal(msg) => {
                error!("Error interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "status": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
