//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los handlers reciben los stores como
//! trait objects: no hay singletons de proceso ni estado mutable global.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::brand_repository::BrandRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::repositories::{BrandStore, VehicleStore};

#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<dyn VehicleStore>,
    pub brands: Arc<dyn BrandStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    /// Estado de producción respaldado por PostgreSQL
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            vehicles: Arc::new(VehicleRepository::new(pool.clone())),
            brands: Arc::new(BrandRepository::new(pool)),
            config,
        }
    }

    /// Estado con stores arbitrarios; lo usan los tests de integración
    pub fn with_stores(
        vehicles: Arc<dyn VehicleStore>,
        brands: Arc<dyn BrandStore>,
        config: EnvironmentConfig,
    ) -> Self {
        Self {
            vehicles,
            brands,
            config,
        }
    }
}
