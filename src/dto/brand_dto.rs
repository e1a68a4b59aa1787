use serde::Serialize;
use utoipa::ToSchema;

use crate::models::brand::Brand;

// Response de marca
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandResponse {
    pub id: i32,
    pub name: String,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
        }
    }
}
