//! Controllers de la API
//!
//! Cada controller orquesta una secuencia Parse → Validate/Load →
//! Mutate/Query → Respond sobre el gateway de persistencia. No retienen
//! estado entre requests.

pub mod brand_controller;
pub mod vehicle_controller;
