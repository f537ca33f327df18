use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::assignment_dto::{
    AssignmentResponse, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::assignment_repository::AssignmentRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, referential_error, AppError, AppResult};
use crate::utils::validation::{
    normalize_plate, parse_date, parse_optional_date, validate_date_range, validate_non_negative,
};

pub struct AssignmentController {
    repository: AssignmentRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
}

impl AssignmentController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: AssignmentRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAssignmentRequest,
    ) -> AppResult<ApiResponse<AssignmentResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        let plate_number = normalize_plate(&request.plate_number);

        // Las claves foráneas deben existir al crear; un borrado posterior
        // puede dejar la fila huérfana y eso se acepta
        if !self.vehicles.plate_exists(&plate_number).await? {
            return Err(referential_error("Vehicle", &plate_number));
        }
        if self.drivers.find_by_id(request.driver_id).await?.is_none() {
            return Err(referential_error("Driver", &request.driver_id.to_string()));
        }

        let start_date = parse_date("start_date", &request.start_date)?;
        let end_date = parse_optional_date("end_date", request.end_date.as_deref())?;
        validate_date_range(start_date, end_date)?;

        let geofence_violations = request.geofence_violations.unwrap_or(0);
        validate_non_negative("geofence_violations", geofence_violations)?;

        let created = self
            .repository
            .create(
                &plate_number,
                request.driver_id,
                request.work_place.as_deref().unwrap_or(""),
                start_date,
                end_date,
                request.gps_position.as_deref().unwrap_or(""),
                geofence_violations,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Assignment created successfully!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<AssignmentResponse> {
        let assignment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Assignment", &id.to_string()))?;

        Ok(assignment.into())
    }

    pub async fn list(&self) -> AppResult<Vec<AssignmentResponse>> {
        let assignments = self.repository.list().await?;
        Ok(assignments.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateAssignmentRequest,
    ) -> AppResult<ApiResponse<AssignmentResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Assignment", &id.to_string()));
        }

        let plate_number = normalize_plate(&request.plate_number);

        if !self.vehicles.plate_exists(&plate_number).await? {
            return Err(referential_error("Vehicle", &plate_number));
        }
        if self.drivers.find_by_id(request.driver_id).await?.is_none() {
            return Err(referential_error("Driver", &request.driver_id.to_string()));
        }

        let start_date = parse_date("start_date", &request.start_date)?;
        let end_date = parse_optional_date("end_date", request.end_date.as_deref())?;
        validate_date_range(start_date, end_date)?;

        let geofence_violations = request.geofence_violations.unwrap_or(0);
        validate_non_negative("geofence_violations", geofence_violations)?;

        let updated = self
            .repository
            .update(
                id,
                &plate_number,
                request.driver_id,
                request.work_place.as_deref().unwrap_or(""),
                start_date,
                end_date,
                request.gps_position.as_deref().unwrap_or(""),
                geofence_violations,
            )
            .await?
            .ok_or_else(|| not_found_error("Assignment", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Assignment updated successfully!".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Assignment", &id.to_string()));
        }
        Ok(())
    }
}
