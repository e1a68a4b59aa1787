//! API REST para la gestión de vehículos de alquiler
//!
//! Un CRUD fino sobre un gateway de persistencia: cinco endpoints de
//! vehículo más el listado de marcas, con validación de campos por
//! payload y errores convertidos al contrato JSON en un único punto.

pub mod config;
pub mod controllers;
pub mod database;
pub mod docs;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
