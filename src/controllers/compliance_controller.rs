use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::compliance_dto::{ComplianceResponse, UpsertComplianceRequest};
use crate::dto::ApiResponse;
use crate::models::compliance::Compliance;
use crate::repositories::compliance_repository::ComplianceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::{normalize_plate, parse_option, parse_optional_date};

pub struct ComplianceController {
    repository: ComplianceRepository,
    vehicles: VehicleRepository,
}

impl ComplianceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ComplianceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Upsert del registro del vehículo: más allá del formato de los
    /// campos no hay restricciones de dominio, siempre se acepta
    pub async fn upsert(
        &self,
        plate_number: &str,
        request: UpsertComplianceRequest,
    ) -> AppResult<ApiResponse<ComplianceResponse>> {
        request
            .validate()
            .map_err(|e| AppError::InvalidFormat(e.to_string()))?;

        let plate_number = normalize_plate(plate_number);
        if !self.vehicles.plate_exists(&plate_number).await? {
            return Err(not_found_error("Vehicle", &plate_number));
        }

        let insurance_type = parse_option(&request.insurance_type)?;
        let yearly_inspection = parse_option(&request.yearly_inspection)?;
        let safety_audit = parse_option(&request.safety_audit)?;
        let insurance_date = parse_optional_date("insurance_date", request.insurance_date.as_deref())?;
        let inspection_date =
            parse_optional_date("inspection_date", request.inspection_date.as_deref())?;

        let compliance = Compliance {
            plate_number,
            insurance_type,
            insurance_date,
            yearly_inspection,
            inspection_date,
            safety_audit,
            utilization_history: request.utilization_history.unwrap_or_default(),
            accident_history: request.accident_history.unwrap_or_default(),
        };
        let saved = self.repository.upsert(&compliance).await?;

        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Compliance data saved!".to_string(),
        ))
    }

    pub async fn get_by_plate(&self, plate_number: &str) -> AppResult<ComplianceResponse> {
        let plate_number = normalize_plate(plate_number);
        if !self.vehicles.plate_exists(&plate_number).await? {
            return Err(not_found_error("Vehicle", &plate_number));
        }

        let compliance = self
            .repository
            .find_by_plate(&plate_number)
            .await?
            .ok_or_else(|| not_found_error("Compliance", &plate_number))?;

        Ok(compliance.into())
    }
}
