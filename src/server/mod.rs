//! HTTP server assembly

mod builder;

pub use builder::ServerBuilder;
