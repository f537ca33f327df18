use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{
    AssignmentSummaryReport, DashboardParams, DashboardReport, DriverLookupParams, DriverReport,
    DriverRosterRow, ReportParams, VehicleReport,
};
use crate::dto::vehicle_dto::VehicleResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/assignment-summary", get(assignment_summary))
        .route("/unassigned-vehicles", get(unassigned_vehicles))
        .route("/driver-assignments", get(driver_assignments))
        .route("/vehicle/:plate", get(vehicle_report))
        .route("/driver", get(driver_report))
}

async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.dashboard(params).await?;
    Ok(Json(response))
}

async fn assignment_summary(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<AssignmentSummaryReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.assignment_summary(params).await?;
    Ok(Json(response))
}

async fn unassigned_vehicles(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.unassigned_vehicles(params).await?;
    Ok(Json(response))
}

async fn driver_assignments(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<DriverRosterRow>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.driver_roster(params).await?;
    Ok(Json(response))
}

async fn vehicle_report(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<VehicleReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.vehicle_report(&plate).await?;
    Ok(Json(response))
}

async fn driver_report(
    State(state): State<AppState>,
    Query(params): Query<DriverLookupParams>,
) -> Result<Json<DriverReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.driver_report(params).await?;
    Ok(Json(response))
}
