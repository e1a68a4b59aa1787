//! Gateway de persistencia
//!
//! Este módulo define los contratos de almacenamiento (`VehicleStore`,
//! `BrandStore`) y sus implementaciones: PostgreSQL para producción y un
//! almacén en memoria para los tests de integración. Los controllers solo
//! conocen los traits; el motor de storage es una caja negra detrás de
//! save/find/delete/list.

pub mod brand_repository;
pub mod memory;
pub mod vehicle_repository;

use async_trait::async_trait;

use crate::models::brand::Brand;
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::AppResult;

/// Operaciones de almacenamiento sobre vehículos.
///
/// Cada request ejecuta como mucho una escritura lógica; no hay
/// transacciones entre entidades. La unicidad de `registration_number` y
/// `vin` la garantiza la implementación en el momento de escribir.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Insertar un vehículo nuevo y devolverlo con su id generado
    async fn create(&self, new: NewVehicle) -> AppResult<Vehicle>;

    /// Buscar por id; la ausencia no es un error
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>>;

    /// Listar todos los vehículos en orden estable de id ascendente
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;

    /// Reemplazar todos los campos del vehículo `id`
    async fn update(&self, id: i32, new: NewVehicle) -> AppResult<Vehicle>;

    /// Borrar el registro; devuelve si algo fue borrado
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Operaciones de lectura sobre marcas. Las marcas se gestionan fuera de
/// esta API, por lo que el contrato no incluye escrituras.
#[async_trait]
pub trait BrandStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Brand>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Brand>>;

    /// Listar todas las marcas en orden de id ascendente
    async fn find_all(&self) -> AppResult<Vec<Brand>>;

    /// Resolver la referencia textual de un payload: primero como id
    /// numérico y, si no, como nombre exacto.
    async fn resolve(&self, reference: &str) -> AppResult<Option<Brand>> {
        let reference = reference.trim();
        if let Ok(id) = reference.parse::<i32>() {
            if let Some(brand) = self.find_by_id(id).await? {
                return Ok(Some(brand));
            }
        }
        self.find_by_name(reference).await
    }
}
