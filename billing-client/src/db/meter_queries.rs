use anyhow::Result;
use sqlx::PgPool;

use crate::domain::{Meter, NewMeter};

pub async fn list_meters(pool: &PgPool) -> Result<Vec<Meter>> {
    let rows = sqlx::query_as::<_, Meter>(
        r#"
        SELECT id, load_amount, min_bill_amount
        FROM meters
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn find_meter(pool: &PgPool, id: i64) -> Result<Option<Meter>> {
    let row = sqlx::query_as::<_, Meter>(
        r#"
        SELECT id, load_amount, min_bill_amount
        FROM meters
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn insert_meter(pool: &PgPool, meter: &NewMeter) -> Result<Meter> {
    let row = sqlx::query_as::<_, Meter>(
        r#"
        INSERT INTO meters (load_amount, min_bill_amount)
        VALUES ($1, $2)
        RETURNING id, load_amount, min_bill_amount
        "#,
    )
    .bind(meter.load_amount)
    .bind(meter.min_bill_amount)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Overwrite every mutable column. Returns `None` when no row has `meter.id`.
pub async fn update_meter(pool: &PgPool, meter: &Meter) -> Result<Option<Meter>> {
    let row = sqlx::query_as::<_, Meter>(
        r#"
        UPDATE meters
        SET load_amount = $2,
            min_bill_amount = $3
        WHERE id = $1
        RETURNING id, load_amount, min_bill_amount
        "#,
    )
    .bind(meter.id)
    .bind(meter.load_amount)
    .bind(meter.min_bill_amount)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_meter(pool: &PgPool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM meters WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
