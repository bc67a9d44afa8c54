use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::records_controller::RecordsController;
use crate::dto::common::{ApiResponse, ListQuery};
use crate::dto::inventory_dto::InventoryDraft;
use crate::models::inventory::{InventoryItem, INVENTORY_ID_PREFIX, INVENTORY_PAGE_SIZE};
use crate::state::AppState;
use crate::store::pagination::Paged;
use crate::store::record_store::next_record_id;
use crate::utils::errors::AppError;

pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

fn controller(state: &AppState) -> RecordsController<InventoryItem> {
    RecordsController::new(state.inventory.clone(), "Inventory item", INVENTORY_PAGE_SIZE)
}

async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Paged<InventoryItem>> {
    Json(controller(&state).list(&query).await)
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryItem>, AppError> {
    Ok(Json(controller(&state).get(&id).await?))
}

async fn create_item(
    State(state): State<AppState>,
    Json(draft): Json<InventoryDraft>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let record = draft.into_record(next_record_id(INVENTORY_ID_PREFIX))?;
    let created = controller(&state).create(record).await;
    Ok(Json(ApiResponse::success_with_message(
        created,
        "Artículo creado exitosamente".to_string(),
    )))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<InventoryDraft>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let record = draft.into_record(id.clone())?;
    let updated = controller(&state).update(&id, record).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Artículo actualizado exitosamente".to_string(),
    )))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state).delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Artículo eliminado exitosamente"
    })))
}
