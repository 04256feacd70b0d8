//! Roster and ID-card endpoints.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use crate::card::{self, CardFilter};
use crate::roster::{self, CardRecord};
use crate::state::AppState;
use crate::utils::error::AppError;

/// GET /api/registration/get_all_id
///
/// The complete resolved roster as a bare JSON array, the shape the card
/// printing view consumes. Filtering happens client side, so no query
/// parameters here.
pub async fn get_all_id(
    State(state): State<AppState>,
) -> Result<Json<Vec<CardRecord>>, AppError> {
    let roster = roster::fetch_roster(&state.db).await?;
    Ok(Json(roster))
}

/// GET /api/registration/print_cards
///
/// Server-rendered print document: filters the roster, partitions it into
/// sheets of four and renders each card with its QR identifier.
pub async fn print_cards(
    State(state): State<AppState>,
    Query(filter): Query<CardFilter>,
) -> Result<Html<String>, AppError> {
    let roster = roster::fetch_roster(&state.db).await?;
    let filtered = filter.apply(&roster);

    tracing::debug!(
        total = roster.len(),
        filtered = filtered.len(),
        sheets = card::sheet_count(filtered.len()),
        "Rendering ID card print document"
    );

    Ok(Html(card::render_print_document(&filtered)?))
}
