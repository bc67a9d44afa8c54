use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::records_controller::RecordsController;
use crate::dto::common::{ApiResponse, ListQuery};
use crate::dto::vehicle_dto::VehicleDraft;
use crate::models::vehicle::{Vehicle, VEHICLE_ID_PREFIX, VEHICLE_PAGE_SIZE};
use crate::state::AppState;
use crate::store::pagination::Paged;
use crate::store::record_store::next_record_id;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
}

fn controller(state: &AppState) -> RecordsController<Vehicle> {
    RecordsController::new(state.vehicles.clone(), "Vehicle", VEHICLE_PAGE_SIZE)
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Paged<Vehicle>> {
    Json(controller(&state).list(&query).await)
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    Ok(Json(controller(&state).get(&id).await?))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(draft): Json<VehicleDraft>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let record = draft.into_record(next_record_id(VEHICLE_ID_PREFIX))?;
    let created = controller(&state).create(record).await;
    Ok(Json(ApiResponse::success_with_message(
        created,
        "Vehículo creado exitosamente".to_string(),
    )))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<VehicleDraft>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let record = draft.into_record(id.clone())?;
    let updated = controller(&state).update(&id, record).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Vehículo actualizado exitosamente".to_string(),
    )))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state).delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
