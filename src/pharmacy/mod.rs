//! Pharmacy ordering variant: medicines and orders

pub mod handlers;
pub mod model;
pub mod service;

pub use handlers::{router, PharmacyAppState};
pub use model::{Medicine, Order};
pub use service::PharmacyService;
