//! Railway entity models
//!
//! Wire format follows the original API: camelCase field names and
//! lowercase status strings ("on time", "delayed", "cancelled").

use serde::{Deserialize, Serialize};

/// Operational status of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainStatus {
    #[serde(rename = "on time")]
    OnTime,
    #[serde(rename = "delayed")]
    Delayed,
    #[serde(rename = "cancelled")]
    Cancelled,
}

/// A train available for booking. Read-only after seeding; the id is
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub id: String,
    pub name: String,
    pub status: TrainStatus,
}

/// Lifecycle of a booking: confirmed on creation, cancelled is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A user's booking on a train. `train_id` and `user_id` are immutable
/// post-creation; `status` is the only mutable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub train_id: String,
    pub user_id: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Successful,
    Pending,
    Failed,
}

/// A payment recorded against a booking. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
}
