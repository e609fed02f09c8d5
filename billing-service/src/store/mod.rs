//! Record stores: id-keyed persistence for each billing entity.

use std::sync::Arc;

use billing_client::domain::{
    Customer, Meter, NewCustomer, NewMeter, NewPricePerUnit, NewSupplier, PricePerUnit, Supplier,
};

use crate::config::{StoreConfig, StoreKind};

pub mod memory;
pub mod postgres;

pub use memory::MemoryTable;
pub use postgres::PgStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// A persisted row with a store-assigned identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// Every mutable field of the row, used for inserts and full replaces.
    type Draft: Send + Sync + 'static;

    /// Name used in not-found messages.
    const RESOURCE: &'static str;

    fn id(&self) -> i64;

    fn from_draft(id: i64, draft: Self::Draft) -> Self;
}

#[async_trait::async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<T>, StoreError>;

    /// Persist a new row; the store assigns its id.
    async fn insert(&self, draft: T::Draft) -> Result<T, StoreError>;

    /// Replace the row with `record.id()`. `None` if it no longer exists.
    async fn update(&self, record: &T) -> Result<Option<T>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

/// Range lookup over the tariff tiers.
#[async_trait::async_trait]
pub trait PriceTable: Send + Sync {
    /// Per-unit price of the tier whose inclusive range contains `units`.
    async fn price_for(&self, units: f64) -> Result<Option<f64>, StoreError>;
}

impl Record for Customer {
    type Draft = NewCustomer;
    const RESOURCE: &'static str = "Customer";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewCustomer) -> Self {
        Customer::from_new(id, draft)
    }
}

impl Record for Meter {
    type Draft = NewMeter;
    const RESOURCE: &'static str = "Meter";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewMeter) -> Self {
        Meter::from_new(id, draft)
    }
}

impl Record for Supplier {
    type Draft = NewSupplier;
    const RESOURCE: &'static str = "Supplier";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewSupplier) -> Self {
        Supplier::from_new(id, draft)
    }
}

impl Record for PricePerUnit {
    type Draft = NewPricePerUnit;
    const RESOURCE: &'static str = "PricePerUnit";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewPricePerUnit) -> Self {
        PricePerUnit::from_new(id, draft)
    }
}

/// One handle per entity table, built once at startup and shared by the
/// services.
#[derive(Clone)]
pub struct Stores {
    pub customers: Arc<dyn RecordStore<Customer>>,
    pub meters: Arc<dyn RecordStore<Meter>>,
    pub suppliers: Arc<dyn RecordStore<Supplier>>,
    pub prices: Arc<dyn RecordStore<PricePerUnit>>,
    pub price_table: Arc<dyn PriceTable>,
}

impl Stores {
    pub fn in_memory() -> Self {
        let prices = Arc::new(MemoryTable::<PricePerUnit>::default());
        Self {
            customers: Arc::new(MemoryTable::<Customer>::default()),
            meters: Arc::new(MemoryTable::<Meter>::default()),
            suppliers: Arc::new(MemoryTable::<Supplier>::default()),
            prices: prices.clone(),
            price_table: prices,
        }
    }

    pub fn postgres(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self {
            customers: store.clone(),
            meters: store.clone(),
            suppliers: store.clone(),
            prices: store.clone(),
            price_table: store,
        }
    }

    pub async fn connect(cfg: &StoreConfig) -> anyhow::Result<Self> {
        match cfg.kind {
            StoreKind::Memory => {
                tracing::warn!("using in-memory store; data is lost on shutdown");
                Ok(Self::in_memory())
            }
            StoreKind::Postgres => {
                let uri = cfg
                    .uri
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("store.uri is required for the postgres store"))?;
                let store = PgStore::connect(uri, cfg.max_connections).await?;
                Ok(Self::postgres(store))
            }
        }
    }
}
