use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::dto::report_dto::{
    AssignmentSummaryReport, DashboardParams, DashboardReport, DriverLookupParams, DriverReport,
    DriverRosterRow, ReportParams, VehicleReport,
};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::services::report_service::ReportService;
use crate::services::status_service::{DEFAULT_DASHBOARD_LIMIT, DEFAULT_MAINTENANCE_WINDOW_DAYS};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::parse_date;

pub struct ReportController {
    service: ReportService,
}

impl ReportController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            service: ReportService::new(pool),
        }
    }

    /// Fecha de referencia del reporte: el parámetro as_of o la fecha actual
    fn resolve_as_of(as_of: Option<&str>) -> AppResult<NaiveDate> {
        match as_of {
            Some(raw) if !raw.trim().is_empty() => parse_date("as_of", raw),
            _ => Ok(chrono::Utc::now().date_naive()),
        }
    }

    pub async fn assignment_summary(
        &self,
        params: ReportParams,
    ) -> AppResult<AssignmentSummaryReport> {
        let as_of = Self::resolve_as_of(params.as_of.as_deref())?;
        self.service.assignment_summary(as_of).await
    }

    pub async fn unassigned_vehicles(
        &self,
        params: ReportParams,
    ) -> AppResult<Vec<VehicleResponse>> {
        let as_of = Self::resolve_as_of(params.as_of.as_deref())?;
        self.service.unassigned_vehicles(as_of).await
    }

    pub async fn driver_roster(&self, params: ReportParams) -> AppResult<Vec<DriverRosterRow>> {
        let as_of = Self::resolve_as_of(params.as_of.as_deref())?;
        self.service.driver_roster(as_of).await
    }

    pub async fn dashboard(&self, params: DashboardParams) -> AppResult<DashboardReport> {
        let as_of = Self::resolve_as_of(params.as_of.as_deref())?;
        let window_days = params.window_days.unwrap_or(DEFAULT_MAINTENANCE_WINDOW_DAYS);
        let limit = params.limit.unwrap_or(DEFAULT_DASHBOARD_LIMIT);
        self.service.dashboard(as_of, window_days, limit).await
    }

    pub async fn vehicle_report(&self, plate_number: &str) -> AppResult<VehicleReport> {
        self.service
            .vehicle_report(&crate::utils::validation::normalize_plate(plate_number))
            .await
    }

    pub async fn driver_report(&self, params: DriverLookupParams) -> AppResult<DriverReport> {
        if let Some(id_number) = params.id_number.as_deref().filter(|s| !s.trim().is_empty()) {
            return self.service.driver_report_by_id_number(id_number.trim()).await;
        }
        if let Some(name) = params.name.as_deref().filter(|s| !s.trim().is_empty()) {
            return self.service.driver_report_by_name(name.trim()).await;
        }
        Err(AppError::InvalidFormat(
            "Provide either 'id_number' or 'name' to look up a driver".to_string(),
        ))
    }
}
