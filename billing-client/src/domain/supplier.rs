#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    /// Free-text category such as "Urban" or "Rural".
    pub supplier_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub name: String,
    pub supplier_type: Option<String>,
}

impl Supplier {
    pub fn from_new(id: i64, new: NewSupplier) -> Self {
        Self {
            id,
            name: new.name,
            supplier_type: new.supplier_type,
        }
    }
}
