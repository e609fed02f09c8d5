use time::Date;

/// A customer row. `bill_amount` is derived from the readings, the referenced
/// meter and the matching price tier; it is refreshed on every write.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub connection_date: Date,
    pub last_reading: f64,
    pub current_reading: f64,
    pub bill_amount: f64,
    pub meter_id: i64,
    pub supplier_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub connection_date: Date,
    pub last_reading: f64,
    pub current_reading: f64,
    pub bill_amount: f64,
    pub meter_id: i64,
    pub supplier_id: i64,
}

impl Customer {
    pub fn from_new(id: i64, new: NewCustomer) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            connection_date: new.connection_date,
            last_reading: new.last_reading,
            current_reading: new.current_reading,
            bill_amount: new.bill_amount,
            meter_id: new.meter_id,
            supplier_id: new.supplier_id,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn customer_serializes_camel_case_with_iso_date() {
        let c = Customer {
            id: 7,
            name: "Rahul".to_string(),
            address: "Gurugram".to_string(),
            connection_date: date!(2024 - 01 - 01),
            last_reading: 100.0,
            current_reading: 150.0,
            bill_amount: 650.0,
            meter_id: 1,
            supplier_id: 2,
        };

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["connectionDate"], "2024-01-01");
        assert_eq!(json["billAmount"], 650.0);
        assert_eq!(json["meterId"], 1);
        assert_eq!(json["supplierId"], 2);
    }
}
