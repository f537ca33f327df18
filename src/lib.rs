//! Fleet management backend
//!
//! Registros crudos de la flota (vehículos, conductores, asignaciones,
//! compliance, mantenimiento) sobre un store SQLite, más la derivación de
//! estado operativo relativa a una fecha de referencia y los reportes
//! agregados que la exponen como JSON.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
