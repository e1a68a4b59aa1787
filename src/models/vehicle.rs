//! Modelo de vehículo
//!
//! Este módulo define el registro principal de la API: un vehículo de
//! alquiler que referencia a una marca por id.

use sqlx::FromRow;

/// Vehículo persistido (tabla `vehicles`)
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub brand_id: i32,
    pub registration_number: String,
    pub vin: String,
    pub client_email: String,
    pub client_address: String,
    pub is_currently_rented: bool,
    pub current_location_address: Option<String>,
}

/// Campos de un vehículo sin id asignado.
///
/// Se usa tanto para insertar como para reemplazar todos los campos en un
/// update: la semántica de actualización es de reemplazo completo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub brand_id: i32,
    pub registration_number: String,
    pub vin: String,
    pub client_email: String,
    pub client_address: String,
    pub is_currently_rented: bool,
    pub current_location_address: Option<String>,
}

impl NewVehicle {
    /// Materializar el registro con el id generado por el almacén
    pub fn into_vehicle(self, id: i32) -> Vehicle {
        Vehicle {
            id,
            brand_id: self.brand_id,
            registration_number: self.registration_number,
            vin: self.vin,
            client_email: self.client_email,
            client_address: self.client_address,
            is_currently_rented: self.is_currently_rented,
            current_location_address: self.current_location_address,
        }
    }
}
