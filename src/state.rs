use std::sync::Arc;

use serde_json::Value;

use crate::{boundaries, config::Config};

/// Process-wide immutable state: the configuration and the boundary
/// feature collection, both fixed before the first request is served.
/// `boundaries` stays `None` when the file failed to load; the server
/// keeps running and the aggregate route reports it per request.
pub struct AppState {
    pub config: Config,
    pub boundaries: Option<Value>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let boundaries = boundaries::load(&config.geojson_path);

        Arc::new(Self { config, boundaries })
    }
}
