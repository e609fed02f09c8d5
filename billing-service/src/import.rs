use std::io::Read;

use billing_client::domain::NewPricePerUnit;
use serde::Deserialize;

use crate::{
    dto::{PricePerUnitDto, Validate},
    error::BillingError,
};

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error("failed to read tariff CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid price tier on line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

/// One CSV row; blank cells deserialize as `None` and fail validation.
#[derive(Debug, Deserialize)]
struct TierRow {
    unit_range_lower: Option<i32>,
    unit_range_upper: Option<i32>,
    price: Option<f64>,
}

/// Parse a tariff CSV with header columns `unit_range_lower`,
/// `unit_range_upper` and `price`.
///
/// The whole file is validated before anything is returned, so a bad row
/// never leaves a partial tariff behind.
pub fn read_price_tiers<R: Read>(reader: R) -> Result<Vec<NewPricePerUnit>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut tiers = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: TierRow = record
            .deserialize(Some(&headers))
            .map_err(|e| ImportError::InvalidRow {
                line,
                reason: e.to_string(),
            })?;

        let dto = PricePerUnitDto {
            unit_range_lower: row.unit_range_lower,
            unit_range_upper: row.unit_range_upper,
            price: row.price,
        };
        let tier = dto.validate().map_err(|e| ImportError::InvalidRow {
            line,
            reason: match e {
                BillingError::Validation(violations) => violations.join(", "),
                other => other.to_string(),
            },
        })?;

        tiers.push(tier);
    }

    Ok(tiers)
}
