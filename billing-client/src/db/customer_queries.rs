use anyhow::Result;
use sqlx::PgPool;

use crate::domain::{Customer, NewCustomer};

pub async fn list_customers(pool: &PgPool) -> Result<Vec<Customer>> {
    let rows = sqlx::query_as::<_, Customer>(
        r#"
        SELECT
            id,
            name,
            address,
            connection_date,
            last_reading,
            current_reading,
            bill_amount,
            meter_id,
            supplier_id
        FROM customers
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn find_customer(pool: &PgPool, id: i64) -> Result<Option<Customer>> {
    let row = sqlx::query_as::<_, Customer>(
        r#"
        SELECT
            id,
            name,
            address,
            connection_date,
            last_reading,
            current_reading,
            bill_amount,
            meter_id,
            supplier_id
        FROM customers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn insert_customer(pool: &PgPool, customer: &NewCustomer) -> Result<Customer> {
    let row = sqlx::query_as::<_, Customer>(
        r#"
        INSERT INTO customers (
            name,
            address,
            connection_date,
            last_reading,
            current_reading,
            bill_amount,
            meter_id,
            supplier_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING
            id,
            name,
            address,
            connection_date,
            last_reading,
            current_reading,
            bill_amount,
            meter_id,
            supplier_id
        "#,
    )
    .bind(&customer.name)
    .bind(&customer.address)
    .bind(customer.connection_date)
    .bind(customer.last_reading)
    .bind(customer.current_reading)
    .bind(customer.bill_amount)
    .bind(customer.meter_id)
    .bind(customer.supplier_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Full replace of a customer row, connection date included; callers decide
/// which value that column keeps.
pub async fn update_customer(pool: &PgPool, customer: &Customer) -> Result<Option<Customer>> {
    let row = sqlx::query_as::<_, Customer>(
        r#"
        UPDATE customers
        SET name = $2,
            address = $3,
            connection_date = $4,
            last_reading = $5,
            current_reading = $6,
            bill_amount = $7,
            meter_id = $8,
            supplier_id = $9
        WHERE id = $1
        RETURNING
            id,
            name,
            address,
            connection_date,
            last_reading,
            current_reading,
            bill_amount,
            meter_id,
            supplier_id
        "#,
    )
    .bind(customer.id)
    .bind(&customer.name)
    .bind(&customer.address)
    .bind(customer.connection_date)
    .bind(customer.last_reading)
    .bind(customer.current_reading)
    .bind(customer.bill_amount)
    .bind(customer.meter_id)
    .bind(customer.supplier_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_customer(pool: &PgPool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
