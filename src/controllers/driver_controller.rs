use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::dto::ApiResponse;
use crate::models::driver::Driver;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{duplicate_key_error, not_found_error, AppError, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        validate_not_empty("name", &request.name)?;
        validate_not_empty("id_number", &request.id_number)?;

        if self.repository.id_number_exists(&request.id_number, None).await? {
            return Err(duplicate_key_error("Driver", "id number", &request.id_number));
        }

        let created = self
            .repository
            .create(
                request.name.trim(),
                request.id_number.trim(),
                request.phone.as_deref().map(str::trim).unwrap_or(""),
                request.reporting_to.as_deref().unwrap_or(""),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            created.into(),
            "Driver added successfully!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<DriverResponse> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        Ok(driver.into())
    }

    pub async fn list(&self) -> AppResult<Vec<DriverResponse>> {
        let drivers = self.repository.list().await?;
        Ok(drivers.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        validate_not_empty("name", &request.name)?;
        validate_not_empty("id_number", &request.id_number)?;

        // El documento puede chocar con otro conductor, nunca consigo mismo
        if self
            .repository
            .id_number_exists(&request.id_number, Some(id))
            .await?
        {
            return Err(duplicate_key_error("Driver", "id number", &request.id_number));
        }

        let driver = Driver {
            id,
            name: request.name.trim().to_string(),
            id_number: request.id_number.trim().to_string(),
            phone: request.phone.as_deref().map(str::trim).unwrap_or("").to_string(),
            reporting_to: request.reporting_to.unwrap_or_default(),
        };
        let updated = self
            .repository
            .update(&driver)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Driver updated successfully!".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Driver", &id.to_string()));
        }
        Ok(())
    }
}
