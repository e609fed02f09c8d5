/// One tariff tier: every consumption value in the inclusive range
/// `[unit_range_lower, unit_range_upper]` is charged `price` per unit.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricePerUnit {
    pub id: i64,
    pub unit_range_lower: i32,
    pub unit_range_upper: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPricePerUnit {
    pub unit_range_lower: i32,
    pub unit_range_upper: i32,
    pub price: f64,
}

impl PricePerUnit {
    pub fn from_new(id: i64, new: NewPricePerUnit) -> Self {
        Self {
            id,
            unit_range_lower: new.unit_range_lower,
            unit_range_upper: new.unit_range_upper,
            price: new.price,
        }
    }

    /// Whether `units` falls inside this tier. Both bounds are inclusive and
    /// the comparison uses the raw, untruncated consumption value.
    pub fn covers(&self, units: f64) -> bool {
        f64::from(self.unit_range_lower) <= units && units <= f64::from(self.unit_range_upper)
    }
}
