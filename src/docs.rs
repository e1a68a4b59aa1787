//! Documento OpenAPI
//!
//! Este módulo agrega las anotaciones `utoipa::path` de cada handler en
//! un único documento servido en /api/docs/openapi.json.

use utoipa::OpenApi;

use crate::dto::brand_dto::BrandResponse;
use crate::dto::vehicle_dto::{StatusResponse, VehiclePayload, VehicleResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vehicle Rental API",
        description = "API REST para la gestión de vehículos de alquiler"
    ),
    paths(
        crate::routes::vehicle_routes::create_vehicle,
        crate::routes::vehicle_routes::read_vehicle,
        crate::routes::vehicle_routes::update_vehicle,
        crate::routes::vehicle_routes::delete_vehicle,
        crate::routes::vehicle_routes::full_list,
        crate::routes::brand_routes::brand_list,
    ),
    components(schemas(VehiclePayload, VehicleResponse, StatusResponse, BrandResponse)),
    tags(
        (name = "vehicle", description = "Operaciones CRUD sobre vehículos"),
        (name = "brand", description = "Listado de marcas")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_covers_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.contains(&&"/api/vehicle/create".to_string()));
        assert!(paths.contains(&&"/api/vehicle/read/{id}".to_string()));
        assert!(paths.contains(&&"/api/vehicle/update/{id}".to_string()));
        assert!(paths.contains(&&"/api/vehicle/delete/{id}".to_string()));
        assert!(paths.contains(&&"/api/vehicle/list".to_string()));
        assert!(paths.contains(&&"/api/brand/list".to_string()));
    }
}
