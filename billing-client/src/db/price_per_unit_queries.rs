use anyhow::Result;
use sqlx::PgPool;

use crate::domain::{NewPricePerUnit, PricePerUnit};

pub async fn list_prices(pool: &PgPool) -> Result<Vec<PricePerUnit>> {
    let rows = sqlx::query_as::<_, PricePerUnit>(
        r#"
        SELECT id, unit_range_lower, unit_range_upper, price
        FROM price_per_unit
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn find_price(pool: &PgPool, id: i64) -> Result<Option<PricePerUnit>> {
    let row = sqlx::query_as::<_, PricePerUnit>(
        r#"
        SELECT id, unit_range_lower, unit_range_upper, price
        FROM price_per_unit
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Price of the tier whose inclusive range contains `units_consumed`.
///
/// Bounds are compared as float8 against the raw consumption value. Overlapping
/// tiers resolve to the one with the lowest id.
pub async fn find_price_for_units(pool: &PgPool, units_consumed: f64) -> Result<Option<f64>> {
    let price = sqlx::query_scalar::<_, f64>(
        r#"
        SELECT price
        FROM price_per_unit
        WHERE unit_range_lower::float8 <= $1::float8
          AND unit_range_upper::float8 >= $1::float8
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(units_consumed)
    .fetch_optional(pool)
    .await?;

    Ok(price)
}

pub async fn insert_price(pool: &PgPool, tier: &NewPricePerUnit) -> Result<PricePerUnit> {
    let row = sqlx::query_as::<_, PricePerUnit>(
        r#"
        INSERT INTO price_per_unit (unit_range_lower, unit_range_upper, price)
        VALUES ($1, $2, $3)
        RETURNING id, unit_range_lower, unit_range_upper, price
        "#,
    )
    .bind(tier.unit_range_lower)
    .bind(tier.unit_range_upper)
    .bind(tier.price)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_price(pool: &PgPool, tier: &PricePerUnit) -> Result<Option<PricePerUnit>> {
    let row = sqlx::query_as::<_, PricePerUnit>(
        r#"
        UPDATE price_per_unit
        SET unit_range_lower = $2,
            unit_range_upper = $3,
            price = $4
        WHERE id = $1
        RETURNING id, unit_range_lower, unit_range_upper, price
        "#,
    )
    .bind(tier.id)
    .bind(tier.unit_range_lower)
    .bind(tier.unit_range_upper)
    .bind(tier.price)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_price(pool: &PgPool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM price_per_unit WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
