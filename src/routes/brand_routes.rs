use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::brand_controller::BrandController;
use crate::dto::brand_dto::BrandResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_brand_router() -> Router<AppState> {
    Router::new().route("/list", get(brand_list))
}

#[utoipa::path(
    get,
    path = "/api/brand/list",
    tag = "brand",
    responses(
        (status = 200, description = "Todas las marcas por id ascendente", body = [BrandResponse]),
        (status = 404, description = "No hay marcas cargadas")
    )
)]
pub async fn brand_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<BrandResponse>>, AppError> {
    let controller = BrandController::new(&state);
    let response = controller.list().await?;
    Ok(Json(response))
}
