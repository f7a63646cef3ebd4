//! Dashboard page assembly.
//!
//! The client fetches the envelope once at startup, builds the map and
//! the optional table from it, and writes one self-contained HTML page.
//! The charting library is loaded from a CDN by the page itself.

use serde_json::Value;

use crate::{
    figure::{self, BarTrace, ChoroplethTrace},
    locations::Envelope,
    table::{Table, default_columns},
};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// One blocking fetch of the aggregate route. No retry, no polling.
pub fn fetch_envelope(url: &str) -> reqwest::Result<Envelope> {
    reqwest::blocking::get(url)?.error_for_status()?.json()
}

pub fn render_page(envelope: Envelope, with_table: bool) -> String {
    let table = with_table.then(|| Table::build(&default_columns(), &envelope.data));
    let trace = ChoroplethTrace::build(envelope.geojson, &envelope.data);
    let map = figure::map_figure(&trace);

    page("Denver Neighborhood Ratings", &map, table.as_ref())
}

/// Static four-category bar chart over hardcoded data; a smoke-test page
/// with no network fetch, not wired to the live data path.
pub fn render_demo_page() -> String {
    let trace = BarTrace::new(&[
        ("Apples", 4.0),
        ("Oranges", 1.0),
        ("Bananas", 2.0),
        ("Grapes", 5.0),
    ]);
    let chart = figure::bar_figure("Dummy Fruit Data", &trace);

    page("Hello Dashboard", &chart, None)
}

fn page(title: &str, figure: &Value, table: Option<&Table>) -> String {
    let table_html = table.map(table_html).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
table {{ border-collapse: collapse; margin-top: 1.5rem; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }}
</style>
</head>
<body>
<h1>{heading}</h1>
<div id="figure" style="height: 600px;"></div>
{table_html}
<script>
const figure = {figure};
Plotly.newPlot("figure", figure.data, figure.layout);
</script>
</body>
</html>
"#,
        heading = escape(title),
    )
}

fn table_html(table: &Table) -> String {
    let mut html = String::from("<table>\n<tr>");

    for label in &table.header {
        html.push_str(&format!("<th>{}</th>", escape(label)));
    }
    html.push_str("</tr>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
