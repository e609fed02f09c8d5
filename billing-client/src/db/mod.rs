//! Row-level queries against the billing tables.
//!
//! Schema is applied out-of-band via `sql/schema/*.sql`.

pub mod customer_queries;
pub mod meter_queries;
pub mod price_per_unit_queries;
pub mod supplier_queries;
