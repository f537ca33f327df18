//! Modelo de Assignment
//!
//! Vincula un vehículo con un conductor durante una ventana de fechas.
//! end_date nulo significa asignación abierta. Las claves foráneas se
//! verifican al crear; un borrado posterior del vehículo o del conductor
//! puede dejar la fila huérfana (comportamiento aceptado del sistema).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    pub id: i64,
    pub plate_number: String,
    pub driver_id: i64,
    pub work_place: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub gps_position: String,
    pub geofence_violations: i64,
}
