//! Repositorios del Entity Store
//!
//! Un repositorio por entidad sobre el pool SQLite. Las operaciones de
//! escritura son sentencias únicas (atómicas); las restricciones UNIQUE
//! del schema respaldan las verificaciones de los controllers frente a
//! escrituras concurrentes.

pub mod assignment_repository;
pub mod compliance_repository;
pub mod driver_repository;
pub mod maintenance_repository;
pub mod vehicle_repository;
