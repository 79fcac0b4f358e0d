//! ServerBuilder for fluent API to build the HTTP application
//!
//! # Example
//!
//! ```ignore
//! let app = ServerBuilder::new()
//!     .with_railway(RailwayService::new())
//!     .with_pharmacy(PharmacyService::new())
//!     .build();
//! ```

use crate::pharmacy::{self, PharmacyService};
use crate::railway::{self, RailwayService};
use anyhow::Result;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder composing the domain routers into one application.
#[derive(Default)]
pub struct ServerBuilder {
    railway: Option<RailwayService>,
    pharmacy: Option<PharmacyService>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the railway endpoints
    pub fn with_railway(mut self, service: RailwayService) -> Self {
        self.railway = Some(service);
        self
    }

    /// Mount the pharmacy endpoints
    pub fn with_pharmacy(mut self, service: PharmacyService) -> Self {
        self.pharmacy = Some(service);
        self
    }

    /// Build the axum application.
    ///
    /// Variants that were not supplied are simply not mounted; a builder
    /// with neither still serves `/health`.
    pub fn build(self) -> Router {
        let mut app = Router::new().route("/health", get(health));

        if let Some(service) = self.railway {
            app = app.merge(railway::router(service));
        }
        if let Some(service) = self.pharmacy {
            app = app.merge(pharmacy::router(service));
        }

        app.layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Build and serve on `addr` until the task is cancelled.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "server listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
