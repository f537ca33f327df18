//! Módulo de base de datos
//!
//! Maneja la conexión y el schema del store SQLite.

pub mod connection;

pub use connection::{create_pool, run_migrations};
