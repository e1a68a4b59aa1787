use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{StatusResponse, VehiclePayload, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_vehicle))
        .route("/read/:id", get(read_vehicle))
        .route("/update/:id", put(update_vehicle))
        .route("/delete/:id", delete(delete_vehicle))
        .route("/list", get(full_list))
}

#[utoipa::path(
    post,
    path = "/api/vehicle/create",
    tag = "vehicle",
    request_body = VehiclePayload,
    responses(
        (status = 201, description = "Vehículo creado", body = StatusResponse),
        (status = 400, description = "Marca inexistente o datos inválidos, con lista de errores")
    )
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<VehiclePayload>,
) -> Result<(StatusCode, Json<StatusResponse>), AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.create(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/vehicle/read/{id}",
    tag = "vehicle",
    params(("id" = i32, Path, description = "Id del vehículo")),
    responses(
        (status = 200, description = "Detalle del vehículo", body = VehicleResponse),
        (status = 404, description = "Vehículo no encontrado")
    )
)]
pub async fn read_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.read(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/vehicle/update/{id}",
    tag = "vehicle",
    params(("id" = i32, Path, description = "Id del vehículo")),
    request_body = VehiclePayload,
    responses(
        (status = 200, description = "Vehículo actualizado", body = StatusResponse),
        (status = 400, description = "Datos inválidos, con lista de errores"),
        (status = 404, description = "Vehículo no encontrado")
    )
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VehiclePayload>,
) -> Result<Json<StatusResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.update(id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/vehicle/delete/{id}",
    tag = "vehicle",
    params(("id" = i32, Path, description = "Id del vehículo")),
    responses(
        (status = 200, description = "Vehículo borrado", body = StatusResponse),
        (status = 404, description = "Vehículo no encontrado")
    )
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StatusResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/vehicle/list",
    tag = "vehicle",
    responses(
        (status = 200, description = "Todos los vehículos; array vacío si no hay ninguno", body = [VehicleResponse])
    )
)]
pub async fn full_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.full_list().await?;
    Ok(Json(response))
}
