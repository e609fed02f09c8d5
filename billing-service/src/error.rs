use crate::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum BillingError {
    #[error("{resource} not found with {field} : '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },
    /// Missing or empty required fields. The list is for logs only.
    #[error("Validation error")]
    Validation(Vec<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BillingError {
    pub fn not_found_by_id(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            field: "id",
            value: id.to_string(),
        }
    }

    /// No tariff tier covers the consumption value.
    pub fn price_not_found(units_consumed: f64) -> Self {
        Self::NotFound {
            resource: "Price per unit",
            field: "unit consumed",
            value: format!("{units_consumed:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_resource_field_and_value() {
        let err = BillingError::not_found_by_id("Meter", 12);
        assert_eq!(err.to_string(), "Meter not found with id : '12'");
    }

    #[test]
    fn price_not_found_keeps_fractional_consumption() {
        assert_eq!(
            BillingError::price_not_found(50.0).to_string(),
            "Price per unit not found with unit consumed : '50.0'"
        );
        assert_eq!(
            BillingError::price_not_found(-12.5).to_string(),
            "Price per unit not found with unit consumed : '-12.5'"
        );
    }
}
