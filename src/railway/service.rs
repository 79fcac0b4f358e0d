//! Railway repository: booking and payment invariants over raw storage
//!
//! Referential integrity is checked here, synchronously before each
//! mutating operation; the stores themselves know nothing about foreign
//! keys.

use super::model::{Booking, BookingStatus, Payment, PaymentStatus, Train, TrainStatus};
use crate::core::{ApiError, ApiResult, KeyValueStore, SharedIdGenerator, UuidGenerator};
use std::sync::{Arc, Mutex};

/// Repository over the three railway collections.
///
/// Cloning shares the underlying stores. Multi-step read-modify-write
/// sequences take the `mutation` lock so that concurrent requests cannot
/// interleave between the read and the write-back.
#[derive(Clone)]
pub struct RailwayService {
    trains: KeyValueStore<Train>,
    bookings: KeyValueStore<Booking>,
    payments: KeyValueStore<Payment>,
    ids: SharedIdGenerator,
    mutation: Arc<Mutex<()>>,
}

impl RailwayService {
    /// Create a service with empty stores and the production id generator.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    /// Create a service with a caller-supplied id generator (tests use a
    /// deterministic sequence).
    pub fn with_id_generator(ids: SharedIdGenerator) -> Self {
        Self {
            trains: KeyValueStore::new(),
            bookings: KeyValueStore::new(),
            payments: KeyValueStore::new(),
            ids,
            mutation: Arc::new(Mutex::new(())),
        }
    }

    /// Seed a train. Trains are read-only once the service starts taking
    /// requests.
    pub fn add_train(&self, name: impl Into<String>, status: TrainStatus) -> ApiResult<Train> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ApiError::invalid_input("name", "must not be empty"));
        }

        let _guard = self.mutation.lock().unwrap();
        let id = self.ids.generate();
        if self.trains.contains_key(&id) {
            return Err(ApiError::AlreadyExists {
                entity_type: "train",
                id,
            });
        }

        let train = Train {
            id: id.clone(),
            name,
            status,
        };
        self.trains.insert(id, train.clone());
        tracing::info!(train_id = %train.id, name = %train.name, "train seeded");
        Ok(train)
    }

    /// Snapshot of all trains in key order.
    pub fn list_trains(&self) -> Vec<Train> {
        self.trains.values()
    }

    /// Status of a single train.
    pub fn train_status(&self, id: &str) -> ApiResult<TrainStatus> {
        self.trains
            .get(id)
            .map(|train| train.status)
            .ok_or_else(|| ApiError::not_found("train", id))
    }

    /// Create a booking for `user_id` on `train_id`.
    ///
    /// The train must exist at creation time; the booking starts confirmed.
    pub fn create_booking(&self, train_id: &str, user_id: &str) -> ApiResult<Booking> {
        let _guard = self.mutation.lock().unwrap();

        if self.trains.get(train_id).is_none() {
            return Err(ApiError::not_found("train", train_id));
        }

        let id = self.ids.generate();
        if self.bookings.contains_key(&id) {
            return Err(ApiError::AlreadyExists {
                entity_type: "booking",
                id,
            });
        }

        let booking = Booking {
            id: id.clone(),
            train_id: train_id.to_string(),
            user_id: user_id.to_string(),
            status: BookingStatus::Confirmed,
        };
        self.bookings.insert(id, booking.clone());
        tracing::info!(booking_id = %booking.id, train_id, user_id, "booking created");
        Ok(booking)
    }

    /// Cancel a booking by setting its status to cancelled and re-inserting.
    ///
    /// Cancelling an already-cancelled booking succeeds again (idempotent);
    /// only an absent id is an error.
    pub fn cancel_booking(&self, id: &str) -> ApiResult<Booking> {
        let _guard = self.mutation.lock().unwrap();

        let mut booking = self
            .bookings
            .get(id)
            .ok_or_else(|| ApiError::not_found("booking", id))?;

        booking.status = BookingStatus::Cancelled;
        self.bookings.insert(id, booking.clone());
        tracing::info!(booking_id = id, "booking cancelled");
        Ok(booking)
    }

    /// Record a payment against a booking.
    ///
    /// Payment processing itself is out of scope; the modeled processor
    /// always accepts, so the payment is recorded as successful.
    pub fn create_payment(&self, booking_id: &str, amount: f64) -> ApiResult<Payment> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ApiError::invalid_input("amount", "must be non-negative"));
        }

        let _guard = self.mutation.lock().unwrap();

        if self.bookings.get(booking_id).is_none() {
            return Err(ApiError::not_found("booking", booking_id));
        }

        let id = self.ids.generate();
        if self.payments.contains_key(&id) {
            return Err(ApiError::AlreadyExists {
                entity_type: "payment",
                id,
            });
        }

        let payment = Payment {
            id: id.clone(),
            booking_id: booking_id.to_string(),
            amount,
            status: PaymentStatus::Successful,
        };
        self.payments.insert(id, payment.clone());
        tracing::info!(payment_id = %payment.id, booking_id, amount, "payment recorded");
        Ok(payment)
    }

    /// All bookings belonging to `user_id`: full scan plus filter. An
    /// unknown user simply yields an empty vec.
    pub fn bookings_for_user(&self, user_id: &str) -> Vec<Booking> {
        self.bookings
            .values()
            .into_iter()
            .filter(|booking| booking.user_id == user_id)
            .collect()
    }
}

impl Default for RailwayService {
    fn default() -> Self {
        Self::new()
    }
}
