//! Repositorio de vehículos sobre PostgreSQL
//!
//! La unicidad de matrícula y VIN la garantizan las constraints UNIQUE de
//! la tabla; aquí solo se traduce la violación al error de la API.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::repositories::VehicleStore;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Traducir un choque de unicidad al campo del contrato JSON
fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_error) = &e {
        if db_error.is_unique_violation() {
            let field = match db_error.constraint() {
                Some(name) if name.contains("registration_number") => "registrationNumber",
                Some(name) if name.contains("vin") => "vin",
                _ => "unique field",
            };
            return AppError::ConstraintViolation(format!("{}: already registered", field));
        }
    }
    AppError::Database(e)
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn create(&self, new: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                brand_id, registration_number, vin, client_email,
                client_address, is_currently_rented, current_location_address
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, brand_id, registration_number, vin, client_email,
                client_address, is_currently_rented, current_location_address
            "#,
        )
        .bind(new.brand_id)
        .bind(new.registration_number)
        .bind(new.vin)
        .bind(new.client_email)
        .bind(new.client_address)
        .bind(new.is_currently_rented)
        .bind(new.current_location_address)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(vehicle)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT
                id, brand_id, registration_number, vin, client_email,
                client_address, is_currently_rented, current_location_address
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT
                id, brand_id, registration_number, vin, client_email,
                client_address, is_currently_rented, current_location_address
            FROM vehicles
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    async fn update(&self, id: i32, new: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET brand_id = $2,
                registration_number = $3,
                vin = $4,
                client_email = $5,
                client_address = $6,
                is_currently_rented = $7,
                current_location_address = $8
            WHERE id = $1
            RETURNING
                id, brand_id, registration_number, vin, client_email,
                client_address, is_currently_rented, current_location_address
            "#,
        )
        .bind(id)
        .bind(new.brand_id)
        .bind(new.registration_number)
        .bind(new.vin)
        .bind(new.client_email)
        .bind(new.client_address)
        .bind(new.is_currently_rented)
        .bind(new.current_location_address)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        vehicle.ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
