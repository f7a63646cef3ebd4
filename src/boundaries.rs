//! Boundary feature collection loading.
//!
//! The GeoJSON file is read exactly once at startup and held as parsed
//! JSON for the process lifetime. A missing or unreadable file leaves the
//! server running; only the aggregate route reports it.

use std::fs::read_to_string;

use serde_json::Value;
use tracing::{info, warn};

pub fn load(path: &str) -> Option<Value> {
    let raw = read_to_string(path)
        .map_err(|e| {
            warn!("Failed to read boundary file {path}: {e}");
        })
        .ok()?;

    let collection: Value = serde_json::from_str(&raw)
        .map_err(|e| {
            warn!("Invalid GeoJSON in {path}: {e}");
        })
        .ok()?;

    let features = collection["features"].as_array().map_or(0, Vec::len);
    info!("Loaded {features} boundary features from {path}");

    Some(collection)
}
