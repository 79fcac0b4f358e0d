//! Railway HTTP handlers
//!
//! Thin glue: extract parameters, call the service, let `ApiError`'s
//! `IntoResponse` impl shape the failure body.

use super::model::{Booking, Payment, Train};
use super::service::RailwayService;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::core::{ApiError, ApiResult};

/// Railway-specific AppState
#[derive(Clone)]
pub struct RailwayAppState {
    pub service: RailwayService,
}

/// Router exposing the railway endpoints.
pub fn router(service: RailwayService) -> Router {
    Router::new()
        .route("/trains", get(list_trains))
        .route("/trains/{id}/status", get(train_status))
        .route("/bookings", post(create_booking))
        // GET's path segment is a user id, DELETE's a booking id
        // (original API shape; axum requires one capture name per segment)
        .route("/bookings/{id}", get(list_bookings).delete(cancel_booking))
        .route("/payments", post(create_payment))
        .with_state(RailwayAppState { service })
}

async fn list_trains(State(state): State<RailwayAppState>) -> Json<Vec<Train>> {
    Json(state.service.list_trains())
}

async fn train_status(
    State(state): State<RailwayAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let status = state.service.train_status(&id)?;
    Ok(Json(json!({ "status": status })))
}

async fn list_bookings(
    State(state): State<RailwayAppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<Booking>> {
    Json(state.service.bookings_for_user(&user_id))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingPayload {
    train_id: Option<String>,
    user_id: Option<String>,
}

async fn create_booking(
    State(state): State<RailwayAppState>,
    Json(payload): Json<CreateBookingPayload>,
) -> ApiResult<Json<Booking>> {
    let train_id = payload
        .train_id
        .ok_or_else(|| ApiError::invalid_input("trainId", "missing required field"))?;
    let user_id = payload
        .user_id
        .ok_or_else(|| ApiError::invalid_input("userId", "missing required field"))?;

    let booking = state.service.create_booking(&train_id, &user_id)?;
    Ok(Json(booking))
}

async fn cancel_booking(
    State(state): State<RailwayAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.service.cancel_booking(&id)?;
    Ok(Json(json!({ "message": "Booking cancelled successfully" })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePaymentPayload {
    booking_id: Option<String>,
    amount: Option<f64>,
}

async fn create_payment(
    State(state): State<RailwayAppState>,
    Json(payload): Json<CreatePaymentPayload>,
) -> ApiResult<Json<Payment>> {
    let booking_id = payload
        .booking_id
        .ok_or_else(|| ApiError::invalid_input("bookingId", "missing required field"))?;
    let amount = payload
        .amount
        .ok_or_else(|| ApiError::invalid_input("amount", "missing required field"))?;

    let payment = state.service.create_payment(&booking_id, amount)?;
    Ok(Json(payment))
}
