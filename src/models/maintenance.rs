//! Modelo de Maintenance
//!
//! Historial de servicio por vehículo: odómetro y fecha del último servicio
//! más el objetivo del siguiente. Un vehículo puede tener varios registros.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Centro de mantenimiento - mapea a la columna TEXT maintenance_center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum MaintenanceCenter {
    #[serde(rename = "EEP")]
    #[sqlx(rename = "EEP")]
    Eep,
    Moenco,
    Other,
}

impl MaintenanceCenter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceCenter::Eep => "EEP",
            MaintenanceCenter::Moenco => "Moenco",
            MaintenanceCenter::Other => "Other",
        }
    }
}

impl fmt::Display for MaintenanceCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceCenter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "EEP" => Ok(MaintenanceCenter::Eep),
            "Moenco" => Ok(MaintenanceCenter::Moenco),
            "Other" => Ok(MaintenanceCenter::Other),
            other => Err(format!(
                "Invalid maintenance center '{}' (expected EEP, Moenco or Other)",
                other
            )),
        }
    }
}

/// Maintenance - mapea exactamente a la tabla maintenance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maintenance {
    pub id: i64,
    pub plate_number: String,
    pub last_service_km: i64,
    pub last_service_date: NaiveDate,
    pub next_service_km: i64,
    pub next_service_date: NaiveDate,
    pub maintenance_center: MaintenanceCenter,
}
