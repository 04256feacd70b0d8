//! Event list endpoints for the console dropdowns and grids.

use axum::{extract::State, Json};

use crate::models::{Event, EventResponse};
use crate::state::AppState;
use crate::utils::error::AppError;

const EVENT_COLUMNS: &str = "id, name, host, description, start_date, end_date, \
                             active, required_receipt, venue, certificates_url";

/// GET /api/events/get_event
pub async fn get_event(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM rael.events ORDER BY start_date, id");
    let events = sqlx::query_as::<_, Event>(&sql).fetch_all(&state.db).await?;

    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// GET /api/events/get_active_events
pub async fn get_active_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM rael.events WHERE active = TRUE ORDER BY start_date, id"
    );
    let events = sqlx::query_as::<_, Event>(&sql).fetch_all(&state.db).await?;

    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}
