use billing_client::domain::{Customer, Meter, NewCustomer, Supplier};

use super::{BillCalculator, RecordService};
use crate::{
    dto::{CustomerDetails, CustomerDto, Validate},
    error::BillingError,
};

#[derive(Clone)]
pub struct CustomerService {
    records: RecordService<Customer>,
    meters: RecordService<Meter>,
    suppliers: RecordService<Supplier>,
    bills: BillCalculator,
}

impl CustomerService {
    pub fn new(
        records: RecordService<Customer>,
        meters: RecordService<Meter>,
        suppliers: RecordService<Supplier>,
        bills: BillCalculator,
    ) -> Self {
        Self {
            records,
            meters,
            suppliers,
            bills,
        }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, BillingError> {
        self.records.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Customer, BillingError> {
        self.records.get(id).await
    }

    /// Validate the payload and its meter/supplier references, price the
    /// readings, then persist. Nothing is written if any step fails.
    pub async fn create(&self, dto: CustomerDto) -> Result<Customer, BillingError> {
        let details = dto.validate()?;
        self.ensure_references(&details).await?;
        let bill_amount = self
            .bills
            .calculate(details.last_reading, details.current_reading, details.meter_id)
            .await?;

        let customer = self.records.insert(new_customer(details, bill_amount)).await?;
        tracing::info!(customer_id = customer.id, "customer created");
        Ok(customer)
    }

    /// Replace every mutable field except the connection date, which keeps
    /// the value recorded at creation.
    pub async fn update(&self, id: i64, dto: CustomerDto) -> Result<Customer, BillingError> {
        let details = dto.validate()?;
        let existing = self.records.get(id).await?;
        self.ensure_references(&details).await?;
        let bill_amount = self
            .bills
            .calculate(details.last_reading, details.current_reading, details.meter_id)
            .await?;

        let mut draft = new_customer(details, bill_amount);
        draft.connection_date = existing.connection_date;

        let customer = self.records.replace(Customer::from_new(id, draft)).await?;
        tracing::info!(customer_id = id, "customer updated");
        Ok(customer)
    }

    pub async fn delete(&self, id: i64) -> Result<(), BillingError> {
        self.records.delete(id).await
    }

    /// Bill for the stored readings and meter of customer `id`.
    pub async fn bill(&self, id: i64) -> Result<f64, BillingError> {
        let customer = self.records.get(id).await?;
        tracing::info!(customer_id = id, meter_id = customer.meter_id, "calculating customer bill");
        self.bills
            .calculate(customer.last_reading, customer.current_reading, customer.meter_id)
            .await
    }

    /// Recalculate and store the bill of every customer, e.g. after a tariff
    /// change. Returns how many rows were rewritten; stops at the first error.
    pub async fn recompute_bills(&self) -> Result<usize, BillingError> {
        let customers = self.records.list().await?;
        let mut updated = 0;

        for mut customer in customers {
            let bill_amount = self
                .bills
                .calculate(customer.last_reading, customer.current_reading, customer.meter_id)
                .await?;
            if bill_amount != customer.bill_amount {
                customer.bill_amount = bill_amount;
                self.records.replace(customer).await?;
                updated += 1;
            }
        }

        Ok(updated)
    }

    async fn ensure_references(&self, details: &CustomerDetails) -> Result<(), BillingError> {
        self.meters.ensure_exists(details.meter_id).await?;
        self.suppliers.ensure_exists(details.supplier_id).await
    }
}

fn new_customer(details: CustomerDetails, bill_amount: f64) -> NewCustomer {
    NewCustomer {
        name: details.name,
        address: details.address,
        connection_date: details.connection_date,
        last_reading: details.last_reading,
        current_reading: details.current_reading,
        bill_amount,
        meter_id: details.meter_id,
        supplier_id: details.supplier_id,
    }
}
