//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de formularios y conversión de tipos.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::utils::errors::AppError;

/// Normalizar una placa: mayúsculas y sin espacios alrededor
pub fn normalize_plate(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar y convertir string a fecha (formato YYYY-MM-DD)
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::InvalidFormat(format!(
            "Field '{}' has an invalid date '{}' (expected YYYY-MM-DD)",
            field, value
        ))
    })
}

/// Fecha opcional de formulario: ausente o vacía es None
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(field, raw).map(Some),
    }
}

/// Validar y convertir string a una opción de un conjunto cerrado
pub fn parse_option<T>(value: &str) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    value.trim().parse::<T>().map_err(AppError::InvalidFormat)
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidFormat(format!(
            "Field '{}' must not be empty",
            field
        )));
    }
    Ok(())
}

/// Validar que un valor numérico sea no negativo
pub fn validate_non_negative<T>(field: &str, value: T) -> Result<(), AppError>
where
    T: PartialOrd + std::fmt::Display + num_traits::Zero,
{
    if value < T::zero() {
        return Err(AppError::InvalidFormat(format!(
            "Field '{}' must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Validar que end_date, si existe, no sea anterior a start_date
pub fn validate_date_range(start_date: NaiveDate, end_date: Option<NaiveDate>) -> Result<(), AppError> {
    if let Some(end) = end_date {
        if end < start_date {
            return Err(AppError::InvalidRange(format!(
                "End date {} is earlier than start date {}",
                end, start_date
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::FuelType;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  aa1234b "), "AA1234B");
        assert_eq!(normalize_plate("AA1234B"), "AA1234B");
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("start_date", "2024-01-15").is_ok());
        assert!(parse_date("start_date", "2024/01/15").is_err());
        assert!(parse_date("start_date", "15-01-2024").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date("end_date", None).unwrap(), None);
        assert_eq!(parse_optional_date("end_date", Some("")).unwrap(), None);
        assert_eq!(
            parse_optional_date("end_date", Some("2024-06-30")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30)
        );
        assert!(parse_optional_date("end_date", Some("junk")).is_err());
    }

    #[test]
    fn test_parse_option() {
        let fuel: FuelType = parse_option("Diesel").unwrap();
        assert_eq!(fuel, FuelType::Diesel);
        assert!(parse_option::<FuelType>("Kerosene").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("name", "Abebe").is_ok());
        assert!(validate_not_empty("name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("geofence_violations", 0_i64).is_ok());
        assert!(validate_non_negative("geofence_violations", 3_i64).is_ok());
        assert!(validate_non_negative("geofence_violations", -1_i64).is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert!(validate_date_range(start, None).is_ok());
        assert!(validate_date_range(start, Some(end)).is_ok());
        assert!(validate_date_range(end, Some(start)).is_err());
    }
}
