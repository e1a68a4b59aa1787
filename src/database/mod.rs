//! Módulo de base de datos
//!
//! Maneja la conexión y las migraciones sobre PostgreSQL

pub mod connection;

pub use connection::DatabaseConnection;
