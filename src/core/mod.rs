//! Core building blocks: storage, identifiers, and the error taxonomy

pub mod error;
pub mod id;
pub mod store;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use id::{IdGenerator, SequenceGenerator, SharedIdGenerator, UuidGenerator};
pub use store::KeyValueStore;
