mod customer;
mod meter;
mod price_per_unit;
mod supplier;

pub use customer::{Customer, NewCustomer};
pub use meter::{Meter, NewMeter};
pub use price_per_unit::{NewPricePerUnit, PricePerUnit};
pub use supplier::{NewSupplier, Supplier};
