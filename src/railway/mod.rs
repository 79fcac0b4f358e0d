//! Railway booking variant: trains, bookings, payments

pub mod handlers;
pub mod model;
pub mod service;

pub use handlers::{router, RailwayAppState};
pub use model::{Booking, BookingStatus, Payment, PaymentStatus, Train, TrainStatus};
pub use service::RailwayService;
