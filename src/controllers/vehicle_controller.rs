use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{duplicate_key_error, not_found_error, AppError, AppResult};
use crate::utils::validation::{
    normalize_plate, parse_option, validate_non_negative, validate_not_empty,
};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        let plate_number = normalize_plate(&request.plate_number);
        validate_not_empty("plate_number", &plate_number)?;
        validate_not_empty("chasis", &request.chasis)?;

        let vehicle_type = parse_option(&request.vehicle_type)?;
        let fuel_type = parse_option(&request.fuel_type)?;
        let assigned_for = parse_option(&request.assigned_for)?;

        let fuel_capacity = request.fuel_capacity.unwrap_or(0.0);
        let fuel_consumption = request.fuel_consumption.unwrap_or(0.0);
        validate_non_negative("fuel_capacity", fuel_capacity)?;
        validate_non_negative("fuel_consumption", fuel_consumption)?;

        if self.repository.plate_exists(&plate_number).await? {
            return Err(duplicate_key_error("Vehicle", "plate number", &plate_number));
        }
        if self.repository.chasis_exists(&request.chasis, None).await? {
            return Err(duplicate_key_error("Vehicle", "chasis", &request.chasis));
        }

        let vehicle = Vehicle {
            plate_number,
            chasis: request.chasis,
            vehicle_type,
            make: request.make,
            model: request.model,
            year: request.year,
            fuel_type,
            fuel_capacity,
            fuel_consumption,
            loading_capacity: request.loading_capacity.unwrap_or_default(),
            assigned_for,
        };
        let created = self.repository.create(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Vehicle added successfully!".to_string(),
        ))
    }

    pub async fn get_by_plate(&self, plate_number: &str) -> AppResult<VehicleResponse> {
        let plate_number = normalize_plate(plate_number);
        let vehicle = self
            .repository
            .find_by_plate(&plate_number)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &plate_number))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.list().await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        plate_number: &str,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        let plate_number = normalize_plate(plate_number);
        validate_not_empty("chasis", &request.chasis)?;

        let vehicle_type = parse_option(&request.vehicle_type)?;
        let fuel_type = parse_option(&request.fuel_type)?;
        let assigned_for = parse_option(&request.assigned_for)?;

        let fuel_capacity = request.fuel_capacity.unwrap_or(0.0);
        let fuel_consumption = request.fuel_consumption.unwrap_or(0.0);
        validate_non_negative("fuel_capacity", fuel_capacity)?;
        validate_non_negative("fuel_consumption", fuel_consumption)?;

        let vehicle = Vehicle {
            plate_number: plate_number.clone(),
            chasis: request.chasis,
            vehicle_type,
            make: request.make,
            model: request.model,
            year: request.year,
            fuel_type,
            fuel_capacity,
            fuel_consumption,
            loading_capacity: request.loading_capacity.unwrap_or_default(),
            assigned_for,
        };

        // Un chasis en conflicto con otro vehículo lo rechaza el UNIQUE
        // del store y llega como ConstraintViolation
        let updated = self
            .repository
            .update(&vehicle)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &plate_number))?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Vehicle updated successfully!".to_string(),
        ))
    }

    pub async fn delete(&self, plate_number: &str) -> AppResult<()> {
        let plate_number = normalize_plate(plate_number);
        let deleted = self.repository.delete(&plate_number).await?;
        if !deleted {
            return Err(not_found_error("Vehicle", &plate_number));
        }
        Ok(())
    }
}
