use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::records_controller::RecordsController;
use crate::dto::common::{ApiResponse, ListQuery};
use crate::dto::invoice_dto::InvoiceDraft;
use crate::models::invoice::{Invoice, INVOICE_ID_PREFIX, INVOICE_PAGE_SIZE};
use crate::state::AppState;
use crate::store::pagination::Paged;
use crate::store::record_store::next_record_id;
use crate::utils::errors::AppError;

pub fn create_invoice_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route("/:id", get(get_invoice).put(update_invoice).delete(delete_invoice))
}

fn controller(state: &AppState) -> RecordsController<Invoice> {
    RecordsController::new(state.invoices.clone(), "Invoice", INVOICE_PAGE_SIZE)
}

async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Paged<Invoice>> {
    Json(controller(&state).list(&query).await)
}

async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, AppError> {
    Ok(Json(controller(&state).get(&id).await?))
}

async fn create_invoice(
    State(state): State<AppState>,
    Json(draft): Json<InvoiceDraft>,
) -> Result<Json<ApiResponse<Invoice>>, AppError> {
    let record = draft.into_record(next_record_id(INVOICE_ID_PREFIX))?;
    let created = controller(&state).create(record).await;
    Ok(Json(ApiResponse::success_with_message(
        created,
        "Factura creada exitosamente".to_string(),
    )))
}

async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<InvoiceDraft>,
) -> Result<Json<ApiResponse<Invoice>>, AppError> {
    let record = draft.into_record(id.clone())?;
    let updated = controller(&state).update(&id, record).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Factura actualizada exitosamente".to_string(),
    )))
}

async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state).delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Factura eliminada exitosamente"
    })))
}
