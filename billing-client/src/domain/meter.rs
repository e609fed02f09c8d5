/// An installed meter and the minimum charge billed against it.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Meter {
    pub id: i64,
    pub load_amount: i32,
    pub min_bill_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMeter {
    pub load_amount: i32,
    pub min_bill_amount: f64,
}

impl Meter {
    pub fn from_new(id: i64, new: NewMeter) -> Self {
        Self {
            id,
            load_amount: new.load_amount,
            min_bill_amount: new.min_bill_amount,
        }
    }
}
