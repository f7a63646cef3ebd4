//! The one aggregate this service computes: per-neighborhood average
//! review rating and price, joined client-side with the boundary data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Averages are cast to `float8` so row decoding never meets `numeric`.
pub const AVERAGE_RATINGS_QUERY: &str = "
    SELECT
        loc.neighborhood_name,
        loc.longitude,
        loc.latitude,
        AVG(l.review_scores_rating)::float8 AS average_rating,
        AVG(l.price)::float8 AS average_price
    FROM
        listings l
    JOIN
        locations loc
    ON
        l.location_id = loc.location_id
    GROUP BY
        loc.neighborhood_name,
        loc.longitude,
        loc.latitude
    ORDER BY
        loc.neighborhood_name
";

/// One neighborhood's averaged rating and price plus its coordinates.
/// Built fresh per request, never persisted. The averages are nullable
/// because the source columns are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodAggregate {
    pub neighborhood_name: String,
    pub average_rating: Option<f64>,
    pub average_price: Option<f64>,
    pub longitude: f64,
    pub latitude: f64,
}

/// The combined payload of the aggregate route. The two halves are joined
/// by neighborhood name on the client; the contract does not promise the
/// names line up, and mismatches are dropped during rendering.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Vec<NeighborhoodAggregate>,
    pub geojson: Value,
}

pub fn aggregates_from_rows(
    rows: Vec<Map<String, Value>>,
) -> Result<Vec<NeighborhoodAggregate>, AppError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(AppError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(name: &str, rating: Value, price: Value) -> Map<String, Value> {
        let Value::Object(map) = json!({
            "neighborhood_name": name,
            "average_rating": rating,
            "average_price": price,
            "longitude": -104.98,
            "latitude": 39.74,
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn rows_decode_in_order() {
        let rows = vec![
            row("Baker", json!(4.5), json!(120.0)),
            row("Five Points", json!(4.8), json!(125.0)),
        ];

        let aggregates = aggregates_from_rows(rows).unwrap();

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].neighborhood_name, "Baker");
        assert_eq!(aggregates[1].neighborhood_name, "Five Points");
        assert_eq!(aggregates[1].average_price, Some(125.0));
    }

    #[test]
    fn null_averages_decode_to_none() {
        let aggregates =
            aggregates_from_rows(vec![row("Sunnyside", Value::Null, Value::Null)]).unwrap();

        assert_eq!(aggregates[0].average_rating, None);
        assert_eq!(aggregates[0].average_price, None);
    }

    #[test]
    fn missing_column_is_a_decode_error() {
        let mut incomplete = row("Baker", json!(4.5), json!(120.0));
        incomplete.remove("latitude");

        assert!(aggregates_from_rows(vec![incomplete]).is_err());
    }
}
