use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::dto::ApiResponse;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::{normalize_plate, parse_date, parse_option, validate_non_negative};

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        plate_number: &str,
        request: CreateMaintenanceRequest,
    ) -> AppResult<ApiResponse<MaintenanceResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        let plate_number = normalize_plate(plate_number);
        if !self.vehicles.plate_exists(&plate_number).await? {
            return Err(not_found_error("Vehicle", &plate_number));
        }

        let last_service_date = parse_date("last_service_date", &request.last_service_date)?;
        let next_service_date = parse_date("next_service_date", &request.next_service_date)?;
        validate_non_negative("last_service_km", request.last_service_km)?;
        validate_non_negative("next_service_km", request.next_service_km)?;
        let maintenance_center = parse_option(&request.maintenance_center)?;

        let created = self
            .repository
            .create(
                &plate_number,
                request.last_service_km,
                last_service_date,
                request.next_service_km,
                next_service_date,
                maintenance_center,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Maintenance record added!".to_string(),
        ))
    }

    pub async fn list_by_vehicle(&self, plate_number: &str) -> AppResult<Vec<MaintenanceResponse>> {
        let plate_number = normalize_plate(plate_number);
        if !self.vehicles.plate_exists(&plate_number).await? {
            return Err(not_found_error("Vehicle", &plate_number));
        }

        let records = self.repository.list_by_vehicle(&plate_number).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Maintenance record", &id.to_string()));
        }
        Ok(())
    }
}
