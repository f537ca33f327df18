use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::assignment::Assignment;

/// Request para crear una asignación vehículo-conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 2, max = 20))]
    pub plate_number: String,

    pub driver_id: i64,

    #[validate(length(max = 100))]
    pub work_place: Option<String>,

    pub start_date: String,

    /// Ausente o vacía = asignación abierta
    pub end_date: Option<String>,

    #[validate(length(max = 50))]
    pub gps_position: Option<String>,

    pub geofence_violations: Option<i64>,
}

/// Request para actualizar una asignación
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssignmentRequest {
    #[validate(length(min = 2, max = 20))]
    pub plate_number: String,

    pub driver_id: i64,

    #[validate(length(max = 100))]
    pub work_place: Option<String>,

    pub start_date: String,

    pub end_date: Option<String>,

    #[validate(length(max = 50))]
    pub gps_position: Option<String>,

    pub geofence_violations: Option<i64>,
}

/// Response de asignación para la API
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub plate_number: String,
    pub driver_id: i64,
    pub work_place: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub gps_position: String,
    pub geofence_violations: i64,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            plate_number: assignment.plate_number,
            driver_id: assignment.driver_id,
            work_place: assignment.work_place,
            start_date: assignment.start_date,
            end_date: assignment.end_date,
            gps_position: assignment.gps_position,
            geofence_violations: assignment.geofence_violations,
        }
    }
}
