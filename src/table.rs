//! Column-descriptor driven table construction.
//!
//! Columns pair a header label with a pure accessor over the aggregate
//! type, so a column can only read fields that exist. An accessor
//! returning `None` renders as an empty cell rather than failing the
//! page.

use serde::Serialize;

use crate::locations::NeighborhoodAggregate;

pub struct Column {
    pub label: &'static str,
    pub accessor: fn(&NeighborhoodAggregate) -> Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// One header cell per descriptor, one body row per aggregate with
    /// one cell per descriptor.
    pub fn build(columns: &[Column], aggregates: &[NeighborhoodAggregate]) -> Self {
        let header = columns.iter().map(|c| c.label.to_string()).collect();

        let rows = aggregates
            .iter()
            .map(|aggregate| {
                columns
                    .iter()
                    .map(|column| (column.accessor)(aggregate).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { header, rows }
    }
}

pub fn default_columns() -> Vec<Column> {
    vec![
        Column {
            label: "Neighborhood",
            accessor: |a| Some(a.neighborhood_name.clone()),
        },
        Column {
            label: "Average Rating",
            accessor: |a| a.average_rating.map(|r| format!("{r:.2}")),
        },
        Column {
            label: "Average Price",
            accessor: |a| a.average_price.map(|p| format!("${p:.2}")),
        },
    ]
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

    #[test]
    fn two_aggregates_three_columns() {
        let aggregates = vec![
            aggregate("Baker", Some(4.5), Some(120.0)),
            aggregate("Five Points", Some(4.875), Some(125.0)),
        ];

        let table = Table::build(&default_columns(), &aggregates);

        assert_eq!(table.header.len(), 3);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|row| row.len() == 3));
        assert_eq!(table.rows[0], vec!["Baker", "4.50", "$120.00"]);
        assert_eq!(table.rows[1], vec!["Five Points", "4.88", "$125.00"]);
    }

    #[test]
    fn absent_values_render_as_empty_cells() {
        let table = Table::build(&default_columns(), &[aggregate("Sunnyside", None, None)]);

        assert_eq!(table.rows[0], vec!["Sunnyside", "", ""]);
    }

    #[test]
    fn no_aggregates_still_yields_the_header() {
        let table = Table::build(&default_columns(), &[]);

        assert_eq!(table.header, vec!["Neighborhood", "Average Rating", "Average Price"]);
        assert!(table.rows.is_empty());
    }
}
