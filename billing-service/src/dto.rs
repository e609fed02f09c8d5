//! Wire-level request bodies and their validation into store drafts.
//!
//! Every field deserializes as optional so that a missing field surfaces as a
//! validation failure rather than a decode error.

use billing_client::domain::{NewMeter, NewPricePerUnit, NewSupplier};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::BillingError;

pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, BillingError>;
}

#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn required<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.0.push(format!("{field} is required"));
        }
        value
    }

    fn non_empty(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v),
            _ => {
                self.0.push(format!("{field} can't be empty"));
                None
            }
        }
    }

    fn into_error(self) -> BillingError {
        BillingError::Validation(self.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub connection_date: Option<Date>,
    pub last_reading: Option<f64>,
    pub current_reading: Option<f64>,
    pub meter_id: Option<i64>,
    pub supplier_id: Option<i64>,
}

/// A validated customer payload. The bill amount is not part of it; the
/// customer service computes that before persisting.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub address: String,
    pub connection_date: Date,
    pub last_reading: f64,
    pub current_reading: f64,
    pub meter_id: i64,
    pub supplier_id: i64,
}

impl Validate for CustomerDto {
    type Output = CustomerDetails;

    fn validate(self) -> Result<CustomerDetails, BillingError> {
        let mut v = Violations::default();
        let name = v.non_empty("name", self.name);
        let address = v.non_empty("address", self.address);
        let connection_date = v.required("connectionDate", self.connection_date);
        let last_reading = v.required("lastReading", self.last_reading);
        let current_reading = v.required("currentReading", self.current_reading);
        let meter_id = v.required("meterId", self.meter_id);
        let supplier_id = v.required("supplierId", self.supplier_id);

        match (
            name,
            address,
            connection_date,
            last_reading,
            current_reading,
            meter_id,
            supplier_id,
        ) {
            (
                Some(name),
                Some(address),
                Some(connection_date),
                Some(last_reading),
                Some(current_reading),
                Some(meter_id),
                Some(supplier_id),
            ) => Ok(CustomerDetails {
                name,
                address,
                connection_date,
                last_reading,
                current_reading,
                meter_id,
                supplier_id,
            }),
            _ => Err(v.into_error()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterDto {
    pub load_amount: Option<i32>,
    pub min_bill_amount: Option<f64>,
}

impl Validate for MeterDto {
    type Output = NewMeter;

    fn validate(self) -> Result<NewMeter, BillingError> {
        let mut v = Violations::default();
        let load_amount = v.required("loadAmount", self.load_amount);
        let min_bill_amount = v.required("minBillAmount", self.min_bill_amount);

        match (load_amount, min_bill_amount) {
            (Some(load_amount), Some(min_bill_amount)) => Ok(NewMeter {
                load_amount,
                min_bill_amount,
            }),
            _ => Err(v.into_error()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    pub name: Option<String>,
    pub supplier_type: Option<String>,
}

impl Validate for SupplierDto {
    type Output = NewSupplier;

    fn validate(self) -> Result<NewSupplier, BillingError> {
        let mut v = Violations::default();
        match v.non_empty("name", self.name) {
            Some(name) => Ok(NewSupplier {
                name,
                supplier_type: self.supplier_type,
            }),
            None => Err(v.into_error()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePerUnitDto {
    pub unit_range_lower: Option<i32>,
    pub unit_range_upper: Option<i32>,
    pub price: Option<f64>,
}

impl Validate for PricePerUnitDto {
    type Output = NewPricePerUnit;

    fn validate(self) -> Result<NewPricePerUnit, BillingError> {
        let mut v = Violations::default();
        let lower = v.required("unitRangeLower", self.unit_range_lower);
        let upper = v.required("unitRangeUpper", self.unit_range_upper);
        let price = v.required("price", self.price);

        match (lower, upper, price) {
            (Some(unit_range_lower), Some(unit_range_upper), Some(price)) => Ok(NewPricePerUnit {
                unit_range_lower,
                unit_range_upper,
                price,
            }),
            _ => Err(v.into_error()),
        }
    }
}
