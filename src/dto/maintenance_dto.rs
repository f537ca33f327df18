use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::maintenance::{Maintenance, MaintenanceCenter};

/// Request para registrar un servicio de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub last_service_km: i64,

    pub last_service_date: String,

    pub next_service_km: i64,

    pub next_service_date: String,

    pub maintenance_center: String,
}

/// Response de mantenimiento para la API
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: i64,
    pub plate_number: String,
    pub last_service_km: i64,
    pub last_service_date: NaiveDate,
    pub next_service_km: i64,
    pub next_service_date: NaiveDate,
    pub maintenance_center: MaintenanceCenter,
}

impl From<Maintenance> for MaintenanceResponse {
    fn from(record: Maintenance) -> Self {
        Self {
            id: record.id,
            plate_number: record.plate_number,
            last_service_km: record.last_service_km,
            last_service_date: record.last_service_date,
            next_service_km: record.next_service_km,
            next_service_date: record.next_service_date,
            maintenance_center: record.maintenance_center,
        }
    }
}
