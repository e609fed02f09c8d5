use billing_client::{
    db::{customer_queries, meter_queries, price_per_unit_queries, supplier_queries},
    domain::{
        Customer, Meter, NewCustomer, NewMeter, NewPricePerUnit, NewSupplier, PricePerUnit,
        Supplier,
    },
};
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{PriceTable, RecordStore, StoreError};

/// Postgres-backed store for every billing table.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(uri: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(uri)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait::async_trait]
impl RecordStore<Customer> for PgStore {
    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(customer_queries::list_customers(&self.pool).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        Ok(customer_queries::find_customer(&self.pool, id).await?)
    }

    async fn insert(&self, draft: NewCustomer) -> Result<Customer, StoreError> {
        Ok(customer_queries::insert_customer(&self.pool, &draft).await?)
    }

    async fn update(&self, record: &Customer) -> Result<Option<Customer>, StoreError> {
        Ok(customer_queries::update_customer(&self.pool, record).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(customer_queries::delete_customer(&self.pool, id).await?)
    }
}

#[async_trait::async_trait]
impl RecordStore<Meter> for PgStore {
    async fn list(&self) -> Result<Vec<Meter>, StoreError> {
        Ok(meter_queries::list_meters(&self.pool).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Meter>, StoreError> {
        Ok(meter_queries::find_meter(&self.pool, id).await?)
    }

    async fn insert(&self, draft: NewMeter) -> Result<Meter, StoreError> {
        Ok(meter_queries::insert_meter(&self.pool, &draft).await?)
    }

    async fn update(&self, record: &Meter) -> Result<Option<Meter>, StoreError> {
        Ok(meter_queries::update_meter(&self.pool, record).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(meter_queries::delete_meter(&self.pool, id).await?)
    }
}

#[async_trait::async_trait]
impl RecordStore<Supplier> for PgStore {
    async fn list(&self) -> Result<Vec<Supplier>, StoreError> {
        Ok(supplier_queries::list_suppliers(&self.pool).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Supplier>, StoreError> {
        Ok(supplier_queries::find_supplier(&self.pool, id).await?)
    }

    async fn insert(&self, draft: NewSupplier) -> Result<Supplier, StoreError> {
        Ok(supplier_queries::insert_supplier(&self.pool, &draft).await?)
    }

    async fn update(&self, record: &Supplier) -> Result<Option<Supplier>, StoreError> {
        Ok(supplier_queries::update_supplier(&self.pool, record).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(supplier_queries::delete_supplier(&self.pool, id).await?)
    }
}

#[async_trait::async_trait]
impl RecordStore<PricePerUnit> for PgStore {
    async fn list(&self) -> Result<Vec<PricePerUnit>, StoreError> {
        Ok(price_per_unit_queries::list_prices(&self.pool).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<PricePerUnit>, StoreError> {
        Ok(price_per_unit_queries::find_price(&self.pool, id).await?)
    }

    async fn insert(&self, draft: NewPricePerUnit) -> Result<PricePerUnit, StoreError> {
        Ok(price_per_unit_queries::insert_price(&self.pool, &draft).await?)
    }

    async fn update(&self, record: &PricePerUnit) -> Result<Option<PricePerUnit>, StoreError> {
        Ok(price_per_unit_queries::update_price(&self.pool, record).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(price_per_unit_queries::delete_price(&self.pool, id).await?)
    }
}

#[async_trait::async_trait]
impl PriceTable for PgStore {
    async fn price_for(&self, units: f64) -> Result<Option<f64>, StoreError> {
        Ok(price_per_unit_queries::find_price_for_units(&self.pool, units).await?)
    }
}
