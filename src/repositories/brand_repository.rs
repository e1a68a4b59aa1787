//! Repositorio de marcas sobre PostgreSQL

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::brand::Brand;
use crate::repositories::BrandStore;
use crate::utils::errors::AppResult;

pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandStore for BrandRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Brand>> {
        let brand = sqlx::query_as::<_, Brand>("SELECT id, name FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Brand>> {
        let brand = sqlx::query_as::<_, Brand>("SELECT id, name FROM brands WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    async fn find_all(&self) -> AppResult<Vec<Brand>> {
        let brands =
            sqlx::query_as::<_, Brand>("SELECT id, name FROM brands ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(brands)
    }
}
