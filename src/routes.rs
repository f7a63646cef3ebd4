use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::info;

use crate::{
    database::execute_query,
    error::AppError,
    locations::{AVERAGE_RATINGS_QUERY, Envelope, aggregates_from_rows},
    state::AppState,
};

pub async fn hello_handler() -> &'static str {
    "Hello, World!"
}

/// Average review scores and prices per neighborhood, joined with the
/// boundary feature collection loaded at startup.
pub async fn average_locations_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope>, AppError> {
    let geojson = state.boundaries.clone().ok_or(AppError::MissingGeoJson)?;

    let rows = execute_query(&state.config.db, AVERAGE_RATINGS_QUERY, &[]).await?;
    let data = aggregates_from_rows(rows)?;

    info!(neighborhoods = data.len(), "Serving location averages");

    Ok(Json(Envelope { data, geojson }))
}
