//! Controller de vehículos
//!
//! Este módulo implementa las cinco operaciones CRUD sobre vehículos.
//! La validación de campos la hace el derive de `validator` sobre el
//! payload; la resolución de marca se comprueba aparte porque una marca
//! inexistente es un bad request, no un error de formulario.

use std::collections::HashMap;
use std::sync::Arc;

use validator::Validate;

use crate::dto::vehicle_dto::{StatusResponse, VehiclePayload, VehicleResponse};
use crate::models::brand::Brand;
use crate::repositories::{BrandStore, VehicleStore};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppError, AppResult};

pub struct VehicleController {
    vehicles: Arc<dyn VehicleStore>,
    brands: Arc<dyn BrandStore>,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            vehicles: state.vehicles.clone(),
            brands: state.brands.clone(),
        }
    }

    // La presencia de la marca ya la exigió el validador; volver a
    // comprobarla aquí cubre además la referencia que no resuelve.
    async fn resolve_brand(&self, reference: Option<&str>) -> AppResult<Brand> {
        let brand = match reference {
            Some(reference) => self.brands.resolve(reference).await?,
            None => None,
        };
        brand.ok_or_else(|| bad_request_error("Brand not found"))
    }

    pub async fn create(&self, payload: VehiclePayload) -> AppResult<StatusResponse> {
        payload.validate()?;

        let brand = self.resolve_brand(payload.brand.as_deref()).await?;
        self.vehicles.create(payload.into_new_vehicle(brand.id)).await?;

        Ok(StatusResponse::new("Vehicle created!"))
    }

    pub async fn read(&self, id: i32) -> AppResult<VehicleResponse> {
        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle not found"))?;

        let brand = self
            .brands
            .find_by_id(vehicle.brand_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("marca {} inexistente para el vehículo {}", vehicle.brand_id, id))
            })?;

        Ok(VehicleResponse::from_vehicle(vehicle, brand.name))
    }

    pub async fn update(&self, id: i32, payload: VehiclePayload) -> AppResult<StatusResponse> {
        // El 404 se decide antes de mirar el payload
        let existing = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle not found"))?;

        payload.validate()?;

        let brand = self.resolve_brand(payload.brand.as_deref()).await?;
        self.vehicles
            .update(existing.id, payload.into_new_vehicle(brand.id))
            .await?;

        Ok(StatusResponse::new("Vehicle updated!"))
    }

    pub async fn delete(&self, id: i32) -> AppResult<StatusResponse> {
        let existing = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle not found"))?;

        self.vehicles.delete(existing.id).await?;

        Ok(StatusResponse::new("Vehicle deleted!"))
    }

    /// Lista completa; un parque vacío devuelve un array vacío, a
    /// diferencia del listado de marcas
    pub async fn full_list(&self) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.vehicles.find_all().await?;
        let brand_names: HashMap<i32, String> = self
            .brands
            .find_all()
            .await?
            .into_iter()
            .map(|brand| (brand.id, brand.name))
            .collect();

        vehicles
            .into_iter()
            .map(|vehicle| {
                let name = brand_names.get(&vehicle.brand_id).cloned().ok_or_else(|| {
                    AppError::Internal(format!(
                        "marca {} inexistente para el vehículo {}",
                        vehicle.brand_id, vehicle.id
                    ))
                })?;
                Ok(VehicleResponse::from_vehicle(vehicle, name))
            })
            .collect()
    }
}
