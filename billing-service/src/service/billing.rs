//! Bill calculation.
//!
//! The whole consumption is charged at the flat rate of the single tier that
//! contains it; there is no marginal split across tiers. The meter's minimum
//! bill is always added, even for zero consumption.

use billing_client::domain::Meter;

use super::{PriceTierService, RecordService};
use crate::error::BillingError;

/// Current reading minus last reading. Not clamped: a reading that went
/// backwards yields negative consumption.
pub fn units_consumed(last_reading: f64, current_reading: f64) -> f64 {
    current_reading - last_reading
}

pub fn bill_amount(units_consumed: f64, price_per_unit: f64, min_bill_amount: f64) -> f64 {
    units_consumed * price_per_unit + min_bill_amount
}

#[derive(Clone)]
pub struct BillCalculator {
    prices: PriceTierService,
    meters: RecordService<Meter>,
}

impl BillCalculator {
    pub fn new(prices: PriceTierService, meters: RecordService<Meter>) -> Self {
        Self { prices, meters }
    }

    /// Price the consumption between two readings against the tariff and the
    /// meter's minimum bill.
    ///
    /// Fails with NotFound when no tier covers the consumption or when the
    /// meter does not exist, in that order.
    pub async fn calculate(
        &self,
        last_reading: f64,
        current_reading: f64,
        meter_id: i64,
    ) -> Result<f64, BillingError> {
        let units = units_consumed(last_reading, current_reading);
        let price = self.prices.price_for(units).await?;
        let meter = self.meters.get(meter_id).await?;

        let total = bill_amount(units, price, meter.min_bill_amount);
        metrics::counter!("bills_calculated_total").increment(1);
        tracing::info!(
            meter_id,
            units_consumed = units,
            price_per_unit = price,
            min_bill_amount = meter.min_bill_amount,
            bill_amount = total,
            "bill calculated"
        );

        Ok(total)
    }
}
