//! Services module
//!
//! Este módulo contiene la lógica de negocio: la derivación de estado
//! operativo a partir de los registros crudos y la agregación de reportes.

pub mod report_service;
pub mod status_service;

pub use report_service::ReportService;
