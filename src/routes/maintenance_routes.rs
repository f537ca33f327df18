use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/:plate", post(create_maintenance))
        .route("/:plate", get(list_maintenance))
        .route("/record/:id", delete(delete_maintenance))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(&plate, request).await?;
    Ok(Json(response))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_by_vehicle(&plate).await?;
    Ok(Json(response))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Maintenance record deleted!"
    })))
}
