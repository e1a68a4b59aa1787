//! Almacenes en memoria
//!
//! Implementaciones de los stores respaldadas por un BTreeMap, usadas por
//! los tests de integración para ejercitar la API completa sin PostgreSQL.
//! Reproducen el mismo contrato que las tablas: ids secuenciales nunca
//! reutilizados, unicidad de matrícula y VIN, y listados por id ascendente.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::brand::Brand;
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::repositories::{BrandStore, VehicleStore};
use crate::utils::errors::{AppError, AppResult};

struct VehicleTable {
    rows: BTreeMap<i32, Vehicle>,
    next_id: i32,
}

impl VehicleTable {
    // Mismo mensaje que produce el repositorio PostgreSQL al chocar con
    // una constraint UNIQUE. `exclude` permite que un update no choque
    // consigo mismo.
    fn check_unique(&self, new: &NewVehicle, exclude: Option<i32>) -> AppResult<()> {
        for (id, row) in &self.rows {
            if Some(*id) == exclude {
                continue;
            }
            if row.registration_number == new.registration_number {
                return Err(AppError::ConstraintViolation(
                    "registrationNumber: already registered".to_string(),
                ));
            }
            if row.vin == new.vin {
                return Err(AppError::ConstraintViolation(
                    "vin: already registered".to_string(),
                ));
            }
        }
        Ok(())
    }
}

pub struct InMemoryVehicleStore {
    table: RwLock<VehicleTable>,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(VehicleTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryVehicleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn create(&self, new: NewVehicle) -> AppResult<Vehicle> {
        let mut table = self.table.write().await;
        table.check_unique(&new, None)?;

        let id = table.next_id;
        table.next_id += 1;
        let vehicle = new.into_vehicle(id);
        table.rows.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, new: NewVehicle) -> AppResult<Vehicle> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }
        table.check_unique(&new, Some(id))?;

        let vehicle = new.into_vehicle(id);
        table.rows.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

pub struct InMemoryBrandStore {
    rows: RwLock<BTreeMap<i32, Brand>>,
}

impl InMemoryBrandStore {
    /// Construir el almacén ya poblado, como haría el proceso externo
    /// que gestiona las marcas
    pub fn with_brands(brands: Vec<Brand>) -> Self {
        Self {
            rows: RwLock::new(brands.into_iter().map(|brand| (brand.id, brand)).collect()),
        }
    }
}

#[async_trait]
impl BrandStore for InMemoryBrandStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Brand>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Brand>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|brand| brand.name == name)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Brand>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
