use std::sync::Arc;

use billing_client::domain::PricePerUnit;

use super::Resource;
use crate::{
    dto::Validate,
    error::BillingError,
    store::{PriceTable, Record, RecordStore},
};

/// List / get / create / update / delete over one record store.
pub struct RecordService<T: Record> {
    store: Arc<dyn RecordStore<T>>,
}

impl<T: Record> Clone for RecordService<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: Record> RecordService<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<T>, BillingError> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<T, BillingError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| BillingError::not_found_by_id(T::RESOURCE, id))
    }

    /// Succeeds only if a row with `id` exists.
    pub async fn ensure_exists(&self, id: i64) -> Result<(), BillingError> {
        self.get(id).await.map(|_| ())
    }

    pub async fn insert(&self, draft: T::Draft) -> Result<T, BillingError> {
        Ok(self.store.insert(draft).await?)
    }

    /// Full replace of an existing row.
    pub async fn replace(&self, record: T) -> Result<T, BillingError> {
        let id = record.id();
        self.store
            .update(&record)
            .await?
            .ok_or_else(|| BillingError::not_found_by_id(T::RESOURCE, id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), BillingError> {
        self.get(id).await?;
        if self.store.delete(id).await? {
            tracing::info!(resource = T::RESOURCE, id, "record deleted");
            Ok(())
        } else {
            Err(BillingError::not_found_by_id(T::RESOURCE, id))
        }
    }
}

impl<T: Resource> RecordService<T> {
    pub async fn create(&self, dto: T::Dto) -> Result<T, BillingError> {
        let draft = dto.validate()?;
        let record = self.insert(draft).await?;
        tracing::info!(resource = T::RESOURCE, id = record.id(), "record created");
        Ok(record)
    }

    pub async fn update(&self, id: i64, dto: T::Dto) -> Result<T, BillingError> {
        let draft = dto.validate()?;
        self.get(id).await?;
        let record = self.replace(T::from_draft(id, draft)).await?;
        tracing::info!(resource = T::RESOURCE, id, "record updated");
        Ok(record)
    }
}

/// Price tiers plus the consumption range lookup used for billing.
#[derive(Clone)]
pub struct PriceTierService {
    records: RecordService<PricePerUnit>,
    table: Arc<dyn PriceTable>,
}

impl PriceTierService {
    pub fn new(records: RecordService<PricePerUnit>, table: Arc<dyn PriceTable>) -> Self {
        Self { records, table }
    }

    pub fn records(&self) -> &RecordService<PricePerUnit> {
        &self.records
    }

    pub async fn price_for(&self, units_consumed: f64) -> Result<f64, BillingError> {
        self.table
            .price_for(units_consumed)
            .await?
            .ok_or_else(|| BillingError::price_not_found(units_consumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{MeterDto, PricePerUnitDto, SupplierDto};
    use crate::store::Stores;
    use billing_client::domain::{Meter, Supplier};

    fn meters() -> RecordService<Meter> {
        RecordService::new(Stores::in_memory().meters)
    }

    fn meter_dto(load_amount: i32, min_bill_amount: f64) -> MeterDto {
        MeterDto {
            load_amount: Some(load_amount),
            min_bill_amount: Some(min_bill_amount),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_stored_row() {
        let svc = meters();
        let created = svc.create(meter_dto(3, 500.0)).await.unwrap();

        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.min_bill_amount, 500.0);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let svc = meters();
        let created = svc.create(meter_dto(3, 500.0)).await.unwrap();

        let updated = svc.update(created.id, meter_dto(5, 750.0)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.load_amount, 5);
        assert_eq!(svc.get(created.id).await.unwrap().min_bill_amount, 750.0);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let svc = meters();
        let err = svc.update(99, meter_dto(1, 1.0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Meter not found with id : '99'");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = RecordService::<Supplier>::new(Stores::in_memory().suppliers);
        let s = svc
            .create(SupplierDto {
                name: Some("Ramesh".to_string()),
                supplier_type: Some("Urban".to_string()),
            })
            .await
            .unwrap();

        svc.delete(s.id).await.unwrap();
        assert!(matches!(svc.get(s.id).await, Err(BillingError::NotFound { .. })));
        assert!(matches!(svc.delete(s.id).await, Err(BillingError::NotFound { .. })));
    }

    #[tokio::test]
    async fn invalid_dto_persists_nothing() {
        let svc = meters();
        let err = svc.create(MeterDto::default()).await.unwrap_err();
        assert!(matches!(err, BillingError::Validation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn price_lookup_fails_with_not_found_outside_every_tier() {
        let stores = Stores::in_memory();
        let prices = PriceTierService::new(RecordService::new(stores.prices), stores.price_table);
        prices
            .records()
            .create(PricePerUnitDto {
                unit_range_lower: Some(0),
                unit_range_upper: Some(100),
                price: Some(3.0),
            })
            .await
            .unwrap();

        assert_eq!(prices.price_for(100.0).await.unwrap(), 3.0);
        let err = prices.price_for(150.0).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Price per unit not found with unit consumed : '150.0'"
        );
    }
}
