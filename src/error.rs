use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Every failure on the aggregate route collapses to a 500 with a JSON
/// `{"error": ...}` body; the message is the only distinction clients see.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("GeoJSON data not found")]
    MissingGeoJson,

    #[error("{0}")]
    Connection(tokio_postgres::Error),

    #[error("{0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
