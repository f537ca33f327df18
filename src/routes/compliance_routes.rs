use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};

use crate::controllers::compliance_controller::ComplianceController;
use crate::dto::compliance_dto::{ComplianceResponse, UpsertComplianceRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_compliance_router() -> Router<AppState> {
    Router::new()
        .route("/:plate", get(get_compliance))
        .route("/:plate", put(upsert_compliance))
}

async fn get_compliance(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<ComplianceResponse>, AppError> {
    let controller = ComplianceController::new(state.pool.clone());
    let response = controller.get_by_plate(&plate).await?;
    Ok(Json(response))
}

async fn upsert_compliance(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(request): Json<UpsertComplianceRequest>,
) -> Result<Json<ApiResponse<ComplianceResponse>>, AppError> {
    let controller = ComplianceController::new(state.pool.clone());
    let response = controller.upsert(&plate, request).await?;
    Ok(Json(response))
}
