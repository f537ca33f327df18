//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
///
/// Todos los casos excepto `Database` son resultados recuperables de cara
/// al usuario: la operación aborta y el store queda sin cambios.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Referential error: {0}")]
    ReferentialError(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // Una inserción duplicada concurrente llega como violación UNIQUE
        // del store; se reporta al usuario, nunca como caída del proceso.
        if let sqlx::Error::Database(db) = &e {
            if db.message().contains("UNIQUE constraint failed") {
                return AppError::ConstraintViolation(db.message().to_string());
            }
        }
        AppError::Database(e)
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DuplicateKey(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Duplicate Key".to_string(),
                    message: msg,
                    code: "DUPLICATE_KEY".to_string(),
                },
            ),

            AppError::ReferentialError(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "Referential Error".to_string(),
                    message: msg,
                    code: "REFERENTIAL_ERROR".to_string(),
                },
            ),

            AppError::InvalidRange(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Invalid Range".to_string(),
                    message: msg,
                    code: "INVALID_RANGE".to_string(),
                },
            ),

            AppError::InvalidFormat(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Invalid Format".to_string(),
                    message: msg,
                    code: "INVALID_FORMAT".to_string(),
                },
            ),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    code: "NOT_FOUND".to_string(),
                },
            ),

            AppError::ConstraintViolation(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Constraint Violation".to_string(),
                    message: msg,
                    code: "CONSTRAINT_VIOLATION".to_string(),
                },
            ),

            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        code: "DB_ERROR".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de clave duplicada
pub fn duplicate_key_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::DuplicateKey(format!("{} with {} '{}' already exists", resource, field, value))
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with key '{}' not found", resource, id))
}

/// Función helper para crear errores de referencia inexistente
pub fn referential_error(resource: &str, key: &str) -> AppError {
    AppError::ReferentialError(format!("{} with key '{}' does not exist", resource, key))
}
