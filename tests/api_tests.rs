use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use garagehub_backend::build_router;
use garagehub_backend::config::environment::EnvironmentConfig;
use garagehub_backend::state::AppState;

fn test_app() -> Router {
    build_router(AppState::new(EnvironmentConfig::default()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, payload)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "test@example.com", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "garagehub-backend");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/vehicles", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/vehicles", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/dashboard/summary", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_credentials_are_rejected() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "test@example.com", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn twelve_vehicles_paginate_ten_plus_two() {
    let app = test_app();
    let token = login(&app).await;

    let (status, page1) = send(&app, Method::GET, "/api/vehicles?page=1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page1["items"].as_array().unwrap().len(), 10);
    assert_eq!(page1["totalPages"], 2);
    assert_eq!(page1["totalCount"], 12);

    let (_, page2) = send(&app, Method::GET, "/api/vehicles?page=2", Some(&token), None).await;
    assert_eq!(page2["items"].as_array().unwrap().len(), 2);

    // "Next" en la última página no avanza: la página 3 se recorta a la 2
    let (_, past_end) = send(&app, Method::GET, "/api/vehicles?page=3", Some(&token), None).await;
    assert_eq!(past_end["page"], 2);
    assert_eq!(past_end["items"], page2["items"]);
}

#[tokio::test]
async fn search_invoices_for_acme() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/invoices?q=Acme", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 2);

    let ids: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["INV001", "INV011"]);
}

#[tokio::test]
async fn create_with_blank_required_field_changes_nothing() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/invoices",
        Some(&token),
        Some(json!({
            "client": "Initech",
            "amount": "450.00",
            "date": "2024-08-20",
            "dueDate": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, list) = send(&app, Method::GET, "/api/invoices", Some(&token), None).await;
    assert_eq!(list["totalCount"], 12);
}

#[tokio::test]
async fn created_invoice_is_prepended() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/invoices",
        Some(&token),
        Some(json!({
            "client": "Initech",
            "amount": "450.00",
            "date": "2024-08-20",
            "dueDate": "2024-09-20",
            "description": "TPS Report Automation",
            "status": "Pending"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let new_id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(new_id.starts_with("INV"));

    let (_, list) = send(&app, Method::GET, "/api/invoices?page=1", Some(&token), None).await;
    assert_eq!(list["totalCount"], 13);
    assert_eq!(list["items"][0]["id"], new_id.as_str());
    assert_eq!(list["items"][0]["amount"], "450.00");
}

#[tokio::test]
async fn edit_replaces_exactly_one_record() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/invoices/INV002",
        Some(&token),
        Some(json!({
            "client": "Globex International",
            "amount": "900.00",
            "date": "2024-07-20",
            "dueDate": "2024-08-20",
            "description": "Consulting Hours",
            "status": "Paid"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["client"], "Globex International");

    let (_, edited) = send(&app, Method::GET, "/api/invoices/INV002", Some(&token), None).await;
    assert_eq!(edited["status"], "Paid");
    assert_eq!(edited["amount"], "900.00");

    // El resto de registros no cambia
    let (_, other) = send(&app, Method::GET, "/api/invoices/INV001", Some(&token), None).await;
    assert_eq!(other["client"], "Acme Corp");

    let (_, list) = send(&app, Method::GET, "/api/invoices", Some(&token), None).await;
    assert_eq!(list["totalCount"], 12);
}

#[tokio::test]
async fn deleting_the_last_page_reclamps_pagination() {
    let app = test_app();
    let token = login(&app).await;

    // 12 artículos a 5 por página: la página 3 tiene P011 y P012
    let (_, page3) = send(&app, Method::GET, "/api/inventory?page=3", Some(&token), None).await;
    assert_eq!(page3["items"].as_array().unwrap().len(), 2);

    let (status, _) = send(&app, Method::DELETE, "/api/inventory/P011", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, "/api/inventory/P012", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    // Con 10 registros la página 3 ya no existe: se sirve la 2 completa
    let (_, reclamped) = send(&app, Method::GET, "/api/inventory?page=3", Some(&token), None).await;
    assert_eq!(reclamped["page"], 2);
    assert_eq!(reclamped["items"].as_array().unwrap().len(), 5);
    assert_eq!(reclamped["totalPages"], 2);
}

#[tokio::test]
async fn delete_unknown_record_is_not_found() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/api/vehicles/V999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn payment_invoice_id_is_unchecked_free_text() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/payments",
        Some(&token),
        Some(json!({
            "invoiceId": "NOT-AN-INVOICE",
            "amount": "10.00",
            "date": "2024-08-20",
            "method": "Cash"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["invoiceId"], "NOT-AN-INVOICE");
    assert_eq!(body["data"]["method"], "Cash");
}

#[tokio::test]
async fn register_then_login_roundtrip() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": "mechanic@garagehub.io", "password": "torque-wrench" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "mechanic@garagehub.io");

    // Registro duplicado → conflicto
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": "mechanic@garagehub.io", "password": "torque-wrench" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "mechanic@garagehub.io", "password": "torque-wrench" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert!(body["access_token"].as_str().is_some());
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let app = test_app();
    let token = login(&app).await;

    let (status, _) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::POST, "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    // El JWT sigue sin expirar, pero la sesión ya no existe
    let (status, _) = send(&app, Method::GET, "/api/vehicles", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_summary_reflects_the_fixtures() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/dashboard/summary", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicles"]["total"], 12);
    assert_eq!(body["invoices"]["paid"], 4);
    assert_eq!(body["inventory"]["totalItems"], 12);
    assert_eq!(body["payments"]["total"], 7);
}

#[tokio::test]
async fn assistant_falls_back_when_provider_is_unavailable() {
    // Sin ASSISTANT_API_KEY configurada el chat degrada al fallback
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/assistant/chat",
        None,
        Some(json!({ "messages": [{ "role": "user", "content": "When is V002 back from service?" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["text"],
        "I'm sorry, I encountered an error connecting to my brain. Please try again later."
    );
}

#[tokio::test]
async fn mpesa_push_rejects_malformed_phone_numbers() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pay/mpesa/stkpush",
        None,
        Some(json!({ "amount": 100, "phone_number": "0712345678" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn stripe_intent_without_credentials_fails_closed() {
    // Sin STRIPE_SECRET_KEY el intento queda FAILED y la API responde 400
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pay/stripe/intent",
        None,
        Some(json!({ "amount": 50, "currency": "usd" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to create PaymentIntent");
}
