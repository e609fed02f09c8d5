//! Entity services: store orchestration, referential checks and billing.

use billing_client::domain::{Meter, PricePerUnit, Supplier};
use serde::de::DeserializeOwned;

use crate::{
    dto::{MeterDto, PricePerUnitDto, SupplierDto, Validate},
    store::{Record, Stores},
};

pub mod billing;
pub mod customers;
pub mod records;

pub use billing::BillCalculator;
pub use customers::CustomerService;
pub use records::{PriceTierService, RecordService};

/// A record that is created and replaced directly from its request body.
pub trait Resource: Record {
    type Dto: Validate<Output = Self::Draft> + DeserializeOwned + Send + 'static;
}

impl Resource for Meter {
    type Dto = MeterDto;
}

impl Resource for Supplier {
    type Dto = SupplierDto;
}

impl Resource for PricePerUnit {
    type Dto = PricePerUnitDto;
}

/// Every service, wired once from a set of stores.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub meters: RecordService<Meter>,
    pub suppliers: RecordService<Supplier>,
    pub prices: PriceTierService,
}

impl AppState {
    pub fn new(stores: Stores) -> Self {
        let meters = RecordService::new(stores.meters);
        let suppliers = RecordService::new(stores.suppliers);
        let prices = PriceTierService::new(RecordService::new(stores.prices), stores.price_table);
        let bills = BillCalculator::new(prices.clone(), meters.clone());

        Self {
            customers: CustomerService::new(
                RecordService::new(stores.customers),
                meters.clone(),
                suppliers.clone(),
                bills,
            ),
            meters,
            suppliers,
            prices,
        }
    }
}
