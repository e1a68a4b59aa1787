//! Controller de marcas
//!
//! Las marcas solo se listan: su alta y mantenimiento ocurren fuera de
//! esta API.

use std::sync::Arc;

use crate::dto::brand_dto::BrandResponse;
use crate::repositories::BrandStore;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub struct BrandController {
    brands: Arc<dyn BrandStore>,
}

impl BrandController {
    pub fn new(state: &AppState) -> Self {
        Self {
            brands: state.brands.clone(),
        }
    }

    /// Listado por id ascendente; una tabla vacía es un 404, no un
    /// array vacío.
    pub async fn list(&self) -> AppResult<Vec<BrandResponse>> {
        let brands = self.brands.find_all().await?;

        if brands.is_empty() {
            return Err(not_found_error("No brands found"));
        }

        Ok(brands.into_iter().map(BrandResponse::from).collect())
    }
}
