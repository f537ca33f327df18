//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema SQLite con las convenciones estándar.

pub mod assignment;
pub mod compliance;
pub mod driver;
pub mod maintenance;
pub mod vehicle;
