//! Modelo de marca
//!
//! Las marcas son registros de referencia gestionados fuera de esta API:
//! aquí solo se leen, nunca se crean ni se modifican.

use sqlx::FromRow;

/// Marca de vehículo (tabla `brands`)
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Brand {
    pub id: i32,
    pub name: String,
}
