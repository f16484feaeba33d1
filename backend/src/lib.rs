//! # Plant Tracker Backend
//!
//! Contains all non-UI logic for the plant watering tracker.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, mappers)
//!     ↓
//! Domain Layer (plant service, watering schedule, calendar)
//!     ↓
//! Storage Layer (SQLite via sqlx)
//! ```
//!
//! Every display request recomputes the schedule from stored facts; nothing
//! but the connection pool lives between requests.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{http::HeaderValue, http::Method, routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{CalendarService, PlantService};
use crate::storage::{DbConnection, PlantRepository, PlantStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub plant_service: PlantService,
    pub calendar_service: CalendarService,
    /// Projection window used when expanding watering dates
    pub lookahead_days: u32,
}

impl AppState {
    /// Build state around any storage backend
    pub fn new(storage: Arc<dyn PlantStorage>, lookahead_days: u32) -> Self {
        Self {
            plant_service: PlantService::new(storage),
            calendar_service: CalendarService::new(),
            lookahead_days,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up domain model");
    let repository = PlantRepository::new(db_conn);

    Ok(AppState::new(Arc::new(repository), config.lookahead_days))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(io::rest::plant_apis::dashboard))
        .route("/add", post(io::rest::plant_apis::add_plant))
        .route("/water/:id", get(io::rest::plant_apis::water_plant))
        .route("/delete/:id", get(io::rest::plant_apis::delete_plant))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
