use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use tracing::info;

use crate::dto::checkout_dto::{
    MpesaPaymentRequest, MpesaPushResponse, StripeIntentResponse, StripePaymentRequest,
};
use crate::models::checkout::{
    CheckoutMethod, CheckoutPayment, CheckoutStatus, CHECKOUT_ID_PREFIX,
};
use crate::services::mpesa_service::MpesaService;
use crate::services::stripe_service::StripeService;
use crate::state::AppState;
use crate::store::record_store::next_record_id;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_mpesa_phone;

pub fn create_checkout_router() -> Router<AppState> {
    Router::new()
        .route("/mpesa/stkpush", post(initiate_mpesa_payment))
        .route("/mpesa/callback", post(mpesa_callback))
        .route("/stripe/intent", post(create_stripe_intent))
}

/// Marcar un intento de cobro como fallido
async fn mark_failed(state: &AppState, payment: &CheckoutPayment) {
    let mut failed = payment.clone();
    failed.status = CheckoutStatus::Failed;
    state.checkout_payments.replace(&payment.id, failed).await;
}

async fn initiate_mpesa_payment(
    State(state): State<AppState>,
    Json(request): Json<MpesaPaymentRequest>,
) -> Result<Json<MpesaPushResponse>, AppError> {
    validate_mpesa_phone(&request.phone_number)?;

    let payment = CheckoutPayment {
        id: next_record_id(CHECKOUT_ID_PREFIX),
        amount: request.amount,
        currency: "KES".to_string(),
        method: CheckoutMethod::Mpesa,
        status: CheckoutStatus::Pending,
        transaction_id: None,
        phone_number: Some(request.phone_number.clone()),
        created_at: Utc::now(),
    };
    state.checkout_payments.insert_first(payment.clone()).await;

    let service = MpesaService::new(state.config.clone(), state.http_client.clone());
    match service
        .trigger_stk_push(&request.phone_number, request.amount, &payment.id)
        .await
    {
        Ok(response) if response.get("ResponseCode").and_then(|v| v.as_str()) == Some("0") => {
            Ok(Json(MpesaPushResponse {
                status: "success".to_string(),
                message: "STK Push sent".to_string(),
                payment_id: payment.id,
                provider_response: response,
            }))
        }
        Ok(_) | Err(_) => {
            mark_failed(&state, &payment).await;
            Err(AppError::BadRequest("Failed to initiate STK push".to_string()))
        }
    }
}

/// Acuse del callback de Daraja; la conciliación del recibo queda fuera
/// del alcance del sandbox
async fn mpesa_callback(Json(data): Json<serde_json::Value>) -> Json<serde_json::Value> {
    info!("📥 M-Pesa callback: {}", data);
    Json(serde_json::json!({ "result": "success" }))
}

async fn create_stripe_intent(
    State(state): State<AppState>,
    Json(request): Json<StripePaymentRequest>,
) -> Result<Json<StripeIntentResponse>, AppError> {
    let payment = CheckoutPayment {
        id: next_record_id(CHECKOUT_ID_PREFIX),
        amount: request.amount,
        currency: request.currency.clone(),
        method: CheckoutMethod::Card,
        status: CheckoutStatus::Pending,
        transaction_id: None,
        phone_number: None,
        created_at: Utc::now(),
    };
    state.checkout_payments.insert_first(payment.clone()).await;

    let service = StripeService::new(state.config.clone(), state.http_client.clone());
    match service.create_payment_intent(request.amount, &request.currency).await {
        Ok(intent) => {
            let mut confirmed = payment.clone();
            confirmed.transaction_id = Some(intent.id);
            state.checkout_payments.replace(&payment.id, confirmed).await;

            Ok(Json(StripeIntentResponse {
                status: "success".to_string(),
                client_secret: intent.client_secret,
                payment_id: payment.id,
            }))
        }
        Err(_) => {
            mark_failed(&state, &payment).await;
            Err(AppError::BadRequest("Failed to create PaymentIntent".to_string()))
        }
    }
}
