//! Pharmacy HTTP handlers

use super::model::{Medicine, Order};
use super::service::PharmacyService;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{delete, get};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::core::{ApiError, ApiResult};

/// Pharmacy-specific AppState
#[derive(Clone)]
pub struct PharmacyAppState {
    pub service: PharmacyService,
}

/// Router exposing the pharmacy endpoints.
pub fn router(service: PharmacyService) -> Router {
    Router::new()
        .route("/medicines", get(list_medicines).post(add_medicine))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", delete(cancel_order))
        .route("/orders/{id}/status", get(order_status))
        .with_state(PharmacyAppState { service })
}

async fn list_medicines(State(state): State<PharmacyAppState>) -> Json<Vec<Medicine>> {
    Json(state.service.list_medicines())
}

#[derive(Debug, Deserialize)]
struct AddMedicinePayload {
    name: Option<String>,
    price: Option<f64>,
    stock: Option<u32>,
}

async fn add_medicine(
    State(state): State<PharmacyAppState>,
    Json(payload): Json<AddMedicinePayload>,
) -> ApiResult<Json<Medicine>> {
    // Strict presence checks: a stock of 0 is present, not missing
    let name = payload
        .name
        .ok_or_else(|| ApiError::invalid_input("name", "missing required field"))?;
    let price = payload
        .price
        .ok_or_else(|| ApiError::invalid_input("price", "missing required field"))?;
    let stock = payload
        .stock
        .ok_or_else(|| ApiError::invalid_input("stock", "missing required field"))?;

    let medicine = state.service.add_medicine(name, price, stock)?;
    Ok(Json(medicine))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderPayload {
    user_id: Option<String>,
    medicine_id: Option<String>,
    quantity: Option<u32>,
    payment_method: Option<String>,
}

async fn create_order(
    State(state): State<PharmacyAppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> ApiResult<Json<Order>> {
    let user_id = payload
        .user_id
        .ok_or_else(|| ApiError::invalid_input("userId", "missing required field"))?;
    let medicine_id = payload
        .medicine_id
        .ok_or_else(|| ApiError::invalid_input("medicineId", "missing required field"))?;
    let quantity = payload
        .quantity
        .ok_or_else(|| ApiError::invalid_input("quantity", "missing required field"))?;
    let payment_method = payload
        .payment_method
        .ok_or_else(|| ApiError::invalid_input("paymentMethod", "missing required field"))?;

    let order = state
        .service
        .create_order(&user_id, &medicine_id, quantity, &payment_method)?;
    Ok(Json(order))
}

async fn cancel_order(
    State(state): State<PharmacyAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.service.cancel_order(&id)?;
    Ok(Json(json!({ "message": "Order cancelled successfully" })))
}

async fn order_status(
    State(state): State<PharmacyAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let status = state.service.order_status(&id)?;
    Ok(Json(json!({ "status": status })))
}

async fn list_orders(State(state): State<PharmacyAppState>) -> Json<Vec<Order>> {
    Json(state.service.list_orders())
}
