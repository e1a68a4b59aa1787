use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::vehicle::{NewVehicle, Vehicle};

// Payload de creación y actualización de un vehículo.
//
// Todos los campos son opcionales a nivel de deserialización para que un
// campo ausente llegue al validador y produzca un error de formulario en
// lugar de un rechazo del parser. La actualización reenvía el payload
// completo: no hay patch parcial.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePayload {
    /// Marca por nombre o por id numérico, p. ej. "Toyota" o "3"
    #[validate(required(message = "brand is required"))]
    pub brand: Option<String>,
    #[validate(
        required(message = "registration number is required"),
        length(min = 3, max = 20, message = "registration number must be 3-20 characters"),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub registration_number: Option<String>,
    #[validate(
        required(message = "VIN is required"),
        length(min = 1, max = 17, message = "VIN must be 1-17 characters"),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub vin: Option<String>,
    #[validate(
        required(message = "client email is required"),
        email(message = "client email must be a valid email address"),
        length(max = 100, message = "client email must be at most 100 characters")
    )]
    pub client_email: Option<String>,
    #[validate(
        required(message = "client address is required"),
        length(min = 1, max = 255, message = "client address must be 1-255 characters"),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub client_address: Option<String>,
    pub is_currently_rented: Option<bool>,
    #[validate(length(max = 255, message = "current location address must be at most 255 characters"))]
    pub current_location_address: Option<String>,
}

impl VehiclePayload {
    // Solo debe llamarse con un payload ya validado: los campos requeridos
    // están garantizados como Some. Un checkbox ausente equivale a false.
    pub fn into_new_vehicle(self, brand_id: i32) -> NewVehicle {
        NewVehicle {
            brand_id,
            registration_number: self.registration_number.unwrap_or_default(),
            vin: self.vin.unwrap_or_default(),
            client_email: self.client_email.unwrap_or_default(),
            client_address: self.client_address.unwrap_or_default(),
            is_currently_rented: self.is_currently_rented.unwrap_or(false),
            current_location_address: self.current_location_address,
        }
    }
}

// Response de vehículo: la marca se expone por nombre, ya resuelta
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i32,
    pub brand: String,
    pub registration_number: String,
    pub vin: String,
    pub client_email: String,
    pub client_address: String,
    pub is_currently_rented: bool,
    pub current_location_address: Option<String>,
}

impl VehicleResponse {
    pub fn from_vehicle(vehicle: Vehicle, brand_name: String) -> Self {
        Self {
            id: vehicle.id,
            brand: brand_name,
            registration_number: vehicle.registration_number,
            vin: vehicle.vin,
            client_email: vehicle.client_email,
            client_address: vehicle.client_address,
            is_currently_rented: vehicle.is_currently_rented,
            current_location_address: vehicle.current_location_address,
        }
    }
}

// Response de estado para operaciones de escritura
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}
