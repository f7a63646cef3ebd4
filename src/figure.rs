//! Figure construction for the dashboard page.
//!
//! Traces serialize to chart-library-ready JSON; the drawing itself is
//! left to the external charting library loaded by the page.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::locations::NeighborhoodAggregate;

/// Static viewport defaults over central Denver, not derived from the
/// data's bounding box.
pub const MAP_CENTER_LAT: f64 = 39.7392;
pub const MAP_CENTER_LON: f64 = -104.9903;
pub const MAP_ZOOM: f64 = 10.0;

#[derive(Debug, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geojson: Value,
    pub featureidkey: &'static str,
    pub locations: Vec<String>,
    pub z: Vec<Option<f64>>,
    pub text: Vec<String>,
    pub hoverinfo: &'static str,
    pub colorscale: &'static str,
    pub marker: Value,
}

impl ChoroplethTrace {
    /// Matches aggregates to boundary features by neighborhood name.
    /// Aggregates without a feature are dropped here; features without
    /// an aggregate simply stay uncolored on the map.
    pub fn build(geojson: Value, aggregates: &[NeighborhoodAggregate]) -> Self {
        let known = feature_names(&geojson);

        let mut locations = Vec::new();
        let mut z = Vec::new();
        let mut text = Vec::new();

        for aggregate in aggregates {
            if !known.contains(aggregate.neighborhood_name.as_str()) {
                debug!(
                    neighborhood = %aggregate.neighborhood_name,
                    "No boundary feature for aggregate, dropping from map"
                );
                continue;
            }

            locations.push(aggregate.neighborhood_name.clone());
            z.push(aggregate.average_rating);
            text.push(hover_text(aggregate));
        }

        Self {
            kind: "choroplethmapbox",
            geojson,
            featureidkey: "properties.neighborhood",
            locations,
            z,
            text,
            hoverinfo: "text",
            colorscale: "Viridis",
            marker: json!({ "opacity": 0.75 }),
        }
    }
}

fn feature_names(geojson: &Value) -> HashSet<&str> {
    geojson["features"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|feature| feature["properties"]["neighborhood"].as_str())
        .collect()
}

fn hover_text(aggregate: &NeighborhoodAggregate) -> String {
    let rating = aggregate
        .average_rating
        .map_or_else(|| "n/a".to_string(), |r| format!("{r:.2}"));
    let price = aggregate
        .average_price
        .map_or_else(|| "n/a".to_string(), |p| format!("${p:.2}"));

    format!(
        "{}<br>Rating: {rating}<br>Price: {price}",
        aggregate.neighborhood_name
    )
}

pub fn map_figure(trace: &ChoroplethTrace) -> Value {
    json!({
        "data": [trace],
        "layout": {
            "mapbox": {
                "style": "carto-positron",
                "center": { "lat": MAP_CENTER_LAT, "lon": MAP_CENTER_LON },
                "zoom": MAP_ZOOM,
            },
            "margin": { "l": 0, "r": 0, "t": 0, "b": 0 },
        }
    })
}

#[derive(Debug, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

impl BarTrace {
    pub fn new(categories: &[(&str, f64)]) -> Self {
        Self {
            kind: "bar",
            x: categories.iter().map(|(name, _)| name.to_string()).collect(),
            y: categories.iter().map(|(_, amount)| *amount).collect(),
        }
    }
}

pub fn bar_figure(title: &str, trace: &BarTrace) -> Value {
    json!({
        "data": [trace],
        "layout": { "title": { "text": title } }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(name: &str, rating: Option<f64>, price: Option<f64>) -> NeighborhoodAggregate {
        NeighborhoodAggregate {
            neighborhood_name: name.to_string(),
            average_rating: rating,
            average_price: price,
            longitude: -104.98,
            latitude: 39.74,
        }
    }

    fn collection(names: &[&str]) -> Value {
        let features: Vec<Value> = names
            .iter()
            .map(|name| {
                json!({
                    "type": "Feature",
                    "properties": { "neighborhood": name },
                    "geometry": { "type": "Polygon", "coordinates": [] }
                })
            })
            .collect();

        json!({ "type": "FeatureCollection", "features": features })
    }

    #[test]
    fn aggregates_without_a_feature_are_dropped() {
        let geojson = collection(&["Baker"]);
        let aggregates = vec![
            aggregate("Baker", Some(4.5), Some(120.0)),
            aggregate("Atlantis", Some(5.0), Some(999.0)),
        ];

        let trace = ChoroplethTrace::build(geojson, &aggregates);

        assert_eq!(trace.locations, vec!["Baker"]);
        assert_eq!(trace.z, vec![Some(4.5)]);
    }

    #[test]
    fn features_without_an_aggregate_stay_in_the_geojson() {
        let geojson = collection(&["Baker", "Sunnyside"]);

        let trace = ChoroplethTrace::build(geojson, &[aggregate("Baker", Some(4.5), None)]);

        assert_eq!(trace.locations.len(), 1);
        assert_eq!(trace.geojson["features"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn hover_text_uses_two_decimals() {
        let text = hover_text(&aggregate("Five Points", Some(4.875), Some(125.0)));

        assert_eq!(text, "Five Points<br>Rating: 4.88<br>Price: $125.00");
    }

    #[test]
    fn hover_text_marks_absent_values() {
        let text = hover_text(&aggregate("Sunnyside", None, Some(80.5)));

        assert_eq!(text, "Sunnyside<br>Rating: n/a<br>Price: $80.50");
    }

    #[test]
    fn bar_trace_keeps_category_order() {
        let trace = BarTrace::new(&[("Apples", 4.0), ("Oranges", 1.0)]);

        assert_eq!(trace.x, vec!["Apples", "Oranges"]);
        assert_eq!(trace.y, vec![4.0, 1.0]);
    }
}
