use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::records_controller::RecordsController;
use crate::dto::common::{ApiResponse, ListQuery};
use crate::dto::payment_dto::PaymentDraft;
use crate::models::payment::{Payment, PAYMENT_ID_PREFIX, PAYMENT_PAGE_SIZE};
use crate::state::AppState;
use crate::store::pagination::Paged;
use crate::store::record_store::next_record_id;
use crate::utils::errors::AppError;

pub fn create_payment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(record_payment))
        .route("/:id", get(get_payment).put(update_payment).delete(void_payment))
}

fn controller(state: &AppState) -> RecordsController<Payment> {
    RecordsController::new(state.payments.clone(), "Payment", PAYMENT_PAGE_SIZE)
}

async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Paged<Payment>> {
    Json(controller(&state).list(&query).await)
}

async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payment>, AppError> {
    Ok(Json(controller(&state).get(&id).await?))
}

async fn record_payment(
    State(state): State<AppState>,
    Json(draft): Json<PaymentDraft>,
) -> Result<Json<ApiResponse<Payment>>, AppError> {
    let record = draft.into_record(next_record_id(PAYMENT_ID_PREFIX))?;
    let created = controller(&state).create(record).await;
    Ok(Json(ApiResponse::success_with_message(
        created,
        "Pago registrado exitosamente".to_string(),
    )))
}

async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<PaymentDraft>,
) -> Result<Json<ApiResponse<Payment>>, AppError> {
    let record = draft.into_record(id.clone())?;
    let updated = controller(&state).update(&id, record).await?;
    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Pago actualizado exitosamente".to_string(),
    )))
}

/// Anular un pago del libro (void)
async fn void_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state).delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Pago anulado exitosamente"
    })))
}
