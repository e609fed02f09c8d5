use anyhow::Result;
use sqlx::PgPool;

use crate::domain::{NewSupplier, Supplier};

pub async fn list_suppliers(pool: &PgPool) -> Result<Vec<Supplier>> {
    let rows = sqlx::query_as::<_, Supplier>(
        r#"
        SELECT id, name, supplier_type
        FROM suppliers
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn find_supplier(pool: &PgPool, id: i64) -> Result<Option<Supplier>> {
    let row = sqlx::query_as::<_, Supplier>(
        r#"
        SELECT id, name, supplier_type
        FROM suppliers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn insert_supplier(pool: &PgPool, supplier: &NewSupplier) -> Result<Supplier> {
    let row = sqlx::query_as::<_, Supplier>(
        r#"
        INSERT INTO suppliers (name, supplier_type)
        VALUES ($1, $2)
        RETURNING id, name, supplier_type
        "#,
    )
    .bind(&supplier.name)
    .bind(&supplier.supplier_type)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_supplier(pool: &PgPool, supplier: &Supplier) -> Result<Option<Supplier>> {
    let row = sqlx::query_as::<_, Supplier>(
        r#"
        UPDATE suppliers
        SET name = $2,
            supplier_type = $3
        WHERE id = $1
        RETURNING id, name, supplier_type
        "#,
    )
    .bind(supplier.id)
    .bind(&supplier.name)
    .bind(&supplier.supplier_type)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_supplier(pool: &PgPool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
