//! DTOs de la API
//!
//! Requests de formularios y responses serializables. Las fechas viajan
//! como strings YYYY-MM-DD y se convierten en los controllers; los campos
//! de opción cerrada viajan como strings y se validan contra su conjunto.

pub mod assignment_dto;
pub mod compliance_dto;
pub mod driver_dto;
pub mod maintenance_dto;
pub mod report_dto;
pub mod vehicle_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
