//! # Orderdesk
//!
//! A minimal embedded key-value store with typed entity repositories,
//! serving two small REST backends over the same storage primitive: a
//! railway booking API and a pharmacy ordering API.
//!
//! ## Architecture
//!
//! - **[`core::store::KeyValueStore`]**: ordered map keyed by opaque string
//!   identifiers; get/insert/remove/snapshot-values. Callers always receive
//!   copies, never references into the map.
//! - **Repositories** ([`railway::RailwayService`],
//!   [`pharmacy::PharmacyService`]): entity-specific invariants on top of
//!   raw storage, including referential integrity across collections
//!   (orders decrement the referenced medicine's stock, cancellation
//!   restores it).
//! - **Handlers**: thin axum glue translating requests into repository
//!   calls and typed errors into HTTP responses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orderdesk::prelude::*;
//!
//! let pharmacy = PharmacyService::new();
//! let aspirin = pharmacy.add_medicine("Aspirin", 5.0, 100)?;
//! let order = pharmacy.create_order("u1", &aspirin.id, 10, "card")?;
//! assert_eq!(order.status, "Ordered");
//!
//! let app = ServerBuilder::new().with_pharmacy(pharmacy).build();
//! ```

pub mod config;
pub mod core;
pub mod pharmacy;
pub mod railway;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ApiResult, ErrorResponse},
        id::{IdGenerator, SequenceGenerator, SharedIdGenerator, UuidGenerator},
        store::KeyValueStore,
    };

    // === Domain services ===
    pub use crate::pharmacy::{Medicine, Order, PharmacyService};
    pub use crate::railway::{
        Booking, BookingStatus, Payment, PaymentStatus, RailwayService, Train, TrainStatus,
    };

    // === Config & Server ===
    pub use crate::config::{AppConfig, TrainSeed};
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
