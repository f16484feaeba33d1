//! # REST API for Plant Management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect},
    Form,
};
use shared::AddPlantForm;
use tracing::{error, info, warn};

use crate::domain::commands::plants::CreatePlantCommand;
use crate::domain::models::plant::PlantError;
use crate::domain::watering_schedule::project;
use crate::domain::PlantService;
use crate::io::rest::mappers::PlantMapper;
use crate::AppState;

/// Dashboard view model for the current month
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /");

    let plants = match state.plant_service.list_plants().await {
        Ok(plants) => plants,
        Err(e) => {
            error!("Failed to list plants: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error listing plants").into_response();
        }
    };

    let today = PlantService::today();
    let projection = project(&plants, today, state.lookahead_days);
    let weeks = state.calendar_service.month_weeks(today);
    let response = PlantMapper::to_dashboard(projection, &weeks, &state.calendar_service);

    (StatusCode::OK, Json(response)).into_response()
}

/// Add a plant from the form, then return to the dashboard
pub async fn add_plant(
    State(state): State<AppState>,
    Form(form): Form<AddPlantForm>,
) -> impl IntoResponse {
    info!("POST /add - form: {:?}", form);

    let command = CreatePlantCommand {
        name: form.name,
        species: form.species,
        watering_frequency: form.watering_frequency,
    };

    match state.plant_service.create_plant(command).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(PlantError::Validation(e)) => {
            warn!("Invalid plant form: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => {
            error!("Failed to add plant: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error adding plant").into_response()
        }
    }
}

/// Mark a plant as watered today
pub async fn water_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /water/{}", plant_id);

    match state.plant_service.water_plant(plant_id).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            error!("Failed to water plant {}: {}", plant_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error watering plant").into_response()
        }
    }
}

/// Delete a plant
pub async fn delete_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /delete/{}", plant_id);

    match state.plant_service.delete_plant(plant_id).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            error!("Failed to delete plant {}: {}", plant_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting plant").into_response()
        }
    }
}
