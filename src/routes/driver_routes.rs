use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver))
        .route("/", get(list_drivers))
        .route("/:id", get(get_driver))
        .route("/:id", put(update_driver))
        .route("/:id", delete(delete_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Driver deleted successfully!"
    })))
}
