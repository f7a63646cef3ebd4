//! Data access layer.
//!
//! Every call opens its own connection and closes it before returning,
//! whether the statement succeeded or not. There is no pool and no reuse
//! across calls; a hung database call blocks its caller.

use serde_json::{Map, Number, Value};
use tokio_postgres::{Client, NoTls, Row, types::ToSql};
use tracing::error;

use crate::{config::DbConfig, error::AppError};

/// Opens one connection from the configured parameters. No retry; the
/// caller decides what a failed connection means.
pub async fn connect(db: &DbConfig) -> Result<Client, AppError> {
    let (client, connection) = tokio_postgres::Config::new()
        .dbname(&db.name)
        .user(&db.user)
        .password(&db.password)
        .host(&db.host)
        .port(db.port)
        .connect(NoTls)
        .await
        .map_err(|e| {
            error!("Error connecting to the database: {e}");
            AppError::Connection(e)
        })?;

    // The driver task ends once the client is dropped.
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!("Database connection error: {e}");
        }
    });

    Ok(client)
}

/// Executes one statement and returns its rows as column-name keyed maps,
/// in database row order. Statements without a result set yield an empty
/// vec. The connection is closed on every exit path.
pub async fn execute_query(
    db: &DbConfig,
    sql: &str,
    params: &[&(dyn ToSql + Sync)],
) -> Result<Vec<Map<String, Value>>, AppError> {
    let client = connect(db).await?;

    let rows = client.query(sql, params).await.map_err(|e| {
        error!("Error executing query: {e}");
        AppError::Query(e)
    })?;

    rows.iter().map(row_to_map).collect()
}

/// Executes one parameterized statement once per input row, inside a
/// single transaction. Same connection lifecycle as [`execute_query`].
pub async fn execute_batch(
    db: &DbConfig,
    sql: &str,
    rows: &[&[&(dyn ToSql + Sync)]],
) -> Result<(), AppError> {
    let mut client = connect(db).await?;

    let result = async {
        let tx = client.transaction().await?;
        let statement = tx.prepare(sql).await?;
        for row in rows {
            tx.execute(&statement, row).await?;
        }
        tx.commit().await
    }
    .await;

    result.map_err(|e| {
        error!("Error executing batch query: {e}");
        AppError::Query(e)
    })
}

fn row_to_map(row: &Row) -> Result<Map<String, Value>, AppError> {
    let mut map = Map::new();

    for (idx, column) in row.columns().iter().enumerate() {
        map.insert(column.name().to_string(), cell_to_value(row, idx)?);
    }

    Ok(map)
}

/// Decodes one cell into JSON, covering the column types the listings
/// schema produces. The aggregate query casts its averages to `float8`,
/// so `numeric` never reaches this point.
fn cell_to_value(row: &Row, idx: usize) -> Result<Value, AppError> {
    let value = match row.columns()[idx].type_().name() {
        "bool" => row.try_get::<_, Option<bool>>(idx)?.map(Value::from),
        "int2" => row.try_get::<_, Option<i16>>(idx)?.map(Value::from),
        "int4" => row.try_get::<_, Option<i32>>(idx)?.map(Value::from),
        "int8" => row.try_get::<_, Option<i64>>(idx)?.map(Value::from),
        "float4" => row
            .try_get::<_, Option<f32>>(idx)?
            .and_then(|v| Number::from_f64(f64::from(v)))
            .map(Value::Number),
        "float8" => row
            .try_get::<_, Option<f64>>(idx)?
            .and_then(Number::from_f64)
            .map(Value::Number),
        _ => row.try_get::<_, Option<String>>(idx)?.map(Value::from),
    };

    Ok(value.unwrap_or(Value::Null))
}
